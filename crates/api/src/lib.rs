pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower::ServiceBuilder;

use crate::state::AppState;

/// The full application: routes plus the middleware stack.
pub fn app(state: AppState) -> Router {
    // Body limit stays outermost: CORS needs a `Default` inner response body
    routes::build_router(state).layer(
        ServiceBuilder::new()
            .layer(middleware::body_limit::body_limit_layer())
            .layer(middleware::request_tracing::trace_layer())
            .layer(middleware::cors::cors_layer()),
    )
}
