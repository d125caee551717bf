use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer. The booking API is public and unauthenticated.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
