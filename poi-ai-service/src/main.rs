use poi_ai_service::config::PoiAiConfig;
use poi_ai_service::services::{metrics::init_metrics, tunnel};
use poi_ai_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = PoiAiConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        "poi-ai-service",
        &config.common.log_level,
        config.observability.otlp_endpoint.as_deref(),
    );

    if let Err(e) = init_metrics() {
        tracing::warn!("Metrics disabled: {}", e);
    }

    tracing::info!("Starting OSM-VN AI Backend");

    let tunnel_config = config.tunnel.clone();
    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    // Held for the lifetime of the server; dropping it stops the agent
    let _tunnel = tunnel::start(&tunnel_config, app.port()).await;

    app.run_until_stopped().await
}
