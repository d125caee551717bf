use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use stayhub_core::booking::{CreateBooking, UpdateBooking};
use stayhub_core::model::Booking;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Booking CRUD routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(list_bookings).put(update_booking))
        .route(
            "/bookings/create",
            post(create_booking)
                .get(create_is_not_a_booking)
                .delete(create_is_not_a_booking),
        )
        .route("/bookings/{uuid}", get(get_booking).delete(delete_booking))
}

async fn list_bookings(State(state): State<AppState>) -> ApiResult<Json<Vec<Booking>>> {
    state.bookings().list().await.map(Json).map_err(Into::into)
}

async fn get_booking(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<Booking>> {
    state.bookings().get(&uuid).await.map(Json).map_err(Into::into)
}

async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<CreateBooking>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Booking>)> {
    let Json(payload) = payload?;
    let booking = state.bookings().create(payload).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

async fn update_booking(
    State(state): State<AppState>,
    payload: Result<Json<UpdateBooking>, JsonRejection>,
) -> ApiResult<(StatusCode, &'static str)> {
    let Json(payload) = payload?;
    state.bookings().update(payload).await?;
    Ok((StatusCode::OK, "UPDATED"))
}

async fn delete_booking(
    State(state): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<(StatusCode, &'static str)> {
    state.bookings().delete(&uuid).await?;
    Ok((StatusCode::OK, "DELETED"))
}

// "create" shadows the uuid segment but can never name a booking
async fn create_is_not_a_booking() -> ApiError {
    ApiError::NotFound("booking not found: create".to_string())
}
