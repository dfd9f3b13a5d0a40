#![allow(dead_code)]

use poi_ai_service::config::{
    GenerationConfig, ModelConfig, ObservabilityConfig, PoiAiConfig, ProviderKind, TunnelConfig,
};
use poi_ai_service::services::providers::TextProvider;
use poi_ai_service::services::{GenerationLimits, TextGenerator};
use poi_ai_service::startup::{build_router, AppState};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;

pub fn test_config(provider: ProviderKind) -> PoiAiConfig {
    PoiAiConfig {
        common: service_core::config::Config {
            port: 0,
            log_level: "debug".to_string(),
        },
        models: ModelConfig {
            provider,
            text_model: "gemini-2.0-flash".to_string(),
            api_key: String::new(),
        },
        generation: GenerationConfig {
            timeout_secs: 5,
            max_concurrent: 2,
        },
        tunnel: TunnelConfig {
            auth_token: None,
            agent_binary: "ngrok".to_string(),
            agent_api_url: "http://127.0.0.1:4040".to_string(),
            url_file: "ngrok_url.txt".to_string(),
        },
        observability: ObservabilityConfig {
            otlp_endpoint: None,
        },
    }
}

/// Router around `provider`, probed the same way startup does.
pub async fn router_with(provider: Arc<dyn TextProvider>) -> Router {
    let limits = GenerationLimits {
        max_concurrent: 2,
        timeout: Duration::from_secs(5),
    };
    let generator = Arc::new(TextGenerator::initialize(provider, limits).await);
    build_router(AppState::new(generator))
}
