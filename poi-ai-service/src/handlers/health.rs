use crate::startup::AppState;
use axum::{extract::State, http::Uri, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

pub const SERVICE_NAME: &str = "OSM-VN AI Backend";

/// Service metadata and the public endpoint list.
pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "service": SERVICE_NAME,
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/chat", "/recommend-poi", "/describe-poi", "/health"]
    }))
}

/// Liveness plus whether the generation backend came up.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "models_loaded": state.generator.is_ready(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("No route for {}", uri.path()))
}
