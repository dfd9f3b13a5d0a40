//! Application startup and lifecycle management.

use crate::catalog::CategoryGraph;
use crate::config::{ModelConfig, PoiAiConfig, ProviderKind};
use crate::handlers::{self, chat, describe_poi, health_check, not_found, recommend_poi, service_info};
use crate::recommendation::RecommendationEngine;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::mock::MockTextProvider;
use crate::services::providers::{DisabledTextProvider, TextProvider};
use crate::services::{Assistant, GenerationLimits, TextGenerator};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    cors::open_cors_layer, metrics::metrics_middleware, panic::catch_panic_layer,
    tracing::request_id_middleware, tracing::REQUEST_ID_HEADER,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<RecommendationEngine>,
    pub assistant: Arc<Assistant>,
    pub generator: Arc<TextGenerator>,
}

impl AppState {
    /// Wire the domain services around an already initialized generator.
    pub fn new(generator: Arc<TextGenerator>) -> Self {
        let graph = Arc::new(CategoryGraph::builtin());
        Self {
            recommender: Arc::new(RecommendationEngine::new(graph)),
            assistant: Arc::new(Assistant::new(generator.clone())),
            generator,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health_check))
        .route("/metrics", get(handlers::metrics::metrics))
        .route("/chat", post(chat))
        .route("/recommend-poi", post(recommend_poi))
        .route("/describe-poi", post(describe_poi))
        .route_layer(from_fn(metrics_middleware))
        .fallback(not_found)
        .layer(catch_panic_layer())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(open_cors_layer())
        .with_state(state)
}

/// Construct the configured text backend. A backend that cannot be built is
/// replaced by the disabled one so the service still starts.
pub fn build_provider(models: &ModelConfig) -> Arc<dyn TextProvider> {
    match models.provider {
        ProviderKind::Gemini => {
            let gemini_config = GeminiConfig::new(models.api_key.clone(), models.text_model.clone());
            match GeminiTextProvider::new(gemini_config) {
                Ok(provider) => {
                    tracing::info!(model = %models.text_model, "Initialized Gemini text provider");
                    Arc::new(provider)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to initialize Gemini text provider");
                    Arc::new(DisabledTextProvider)
                }
            }
        }
        ProviderKind::Mock => {
            tracing::info!("Using mock text provider");
            Arc::new(MockTextProvider::new(true))
        }
        ProviderKind::Disabled => {
            tracing::info!("Text generation disabled, serving fallback responses");
            Arc::new(DisabledTextProvider)
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: PoiAiConfig) -> Result<Self, AppError> {
        let provider = build_provider(&config.models);
        Self::build_with_provider(config, provider).await
    }

    /// Build the application around an explicit text backend.
    pub async fn build_with_provider(
        config: PoiAiConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let limits = GenerationLimits {
            max_concurrent: config.generation.max_concurrent,
            timeout: config.generation.timeout(),
        };
        let generator = Arc::new(TextGenerator::initialize(provider, limits).await);
        let state = AppState::new(generator);

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            backend = state.generator.backend(),
            models_loaded = state.generator.is_ready(),
            "POI AI service listening"
        );

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until SIGINT or SIGTERM.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Service shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
