pub mod accommodations;
pub mod bookings;
pub mod guests;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Assemble the full router with all route groups.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(bookings::routes())
        .merge(guests::routes())
        .merge(accommodations::routes())
        .with_state(state)
}
