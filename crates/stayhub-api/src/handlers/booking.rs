//! Booking handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use stayhub_service::booking::BookingRequest;

use crate::dto::request::CreateBookingRequest;
use crate::dto::response::BookingResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    validate_request(&req)?;
    let booking = state
        .booking_service
        .create(
            &auth,
            BookingRequest {
                room_id: req.room_id,
                check_in_date: req.check_in_date,
                check_out_date: req.check_out_date,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

/// GET /api/bookings/my
pub async fn my_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = state.booking_service.get_mine(&auth).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// GET /api/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = state.booking_service.get_by_id(id).await?;
    Ok(Json(booking.into()))
}

/// GET /api/bookings/hotel/{hotelId}
pub async fn bookings_by_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = state.booking_service.get_by_hotel(hotel_id).await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// GET /api/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    let bookings = state.booking_service.get_all().await?;
    Ok(Json(bookings.into_iter().map(Into::into).collect()))
}

/// PUT /api/bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, ApiError> {
    let booking = state.booking_service.cancel(id).await?;
    Ok(Json(booking.into()))
}

/// DELETE /api/bookings/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.booking_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
