use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stayhub_core::model::Accommodation;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Read-only accommodation lookup.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accommodations", get(list_accommodations))
        .route("/accommodations/{id}", get(get_accommodation))
}

async fn list_accommodations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Accommodation>>> {
    state
        .bookings()
        .list_accommodations()
        .await
        .map(Json)
        .map_err(Into::into)
}

async fn get_accommodation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Accommodation>> {
    // Non-numeric ids cannot name an accommodation
    let id: i64 = id
        .parse()
        .map_err(|_| ApiError::NotFound(format!("accommodation not found: {id}")))?;
    state
        .bookings()
        .get_accommodation(id)
        .await
        .map(Json)
        .map_err(Into::into)
}
