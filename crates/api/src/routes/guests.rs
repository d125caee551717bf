use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stayhub_core::model::Guest;

use crate::error::ApiResult;
use crate::state::AppState;

/// Read-only guest lookup.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/guests", get(list_guests))
        .route("/guests/{document}", get(get_guest))
}

async fn list_guests(State(state): State<AppState>) -> ApiResult<Json<Vec<Guest>>> {
    state.bookings().list_guests().await.map(Json).map_err(Into::into)
}

async fn get_guest(
    State(state): State<AppState>,
    Path(document): Path<String>,
) -> ApiResult<Json<Guest>> {
    state
        .bookings()
        .get_guest(&document)
        .await
        .map(Json)
        .map_err(Into::into)
}
