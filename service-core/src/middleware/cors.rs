use tower_http::cors::{Any, CorsLayer};

/// CORS policy for browser clients of the map frontend: any origin, method and header.
pub fn open_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
