//! Room handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use rust_decimal::Decimal;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_entity::room::{CreateRoom, UpdateRoom};

use crate::dto::request::RoomRequest;
use crate::dto::response::RoomResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/rooms/available
pub async fn list_available(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rooms = state.room_service.get_available().await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

/// GET /api/rooms/hotel/{hotelId}
pub async fn list_by_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rooms = state.room_service.get_by_hotel(hotel_id).await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

/// GET /api/rooms/hotel/{hotelId}/available
pub async fn list_available_by_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rooms = state.room_service.get_available_by_hotel(hotel_id).await?;
    Ok(Json(rooms.into_iter().map(Into::into).collect()))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomResponse>, ApiError> {
    let room = state.room_service.get_by_id(id).await?;
    Ok(Json(room.into()))
}

/// POST /api/rooms/hotel/{hotelId}
pub async fn create_room(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
    Json(req): Json<RoomRequest>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    validate_request(&req)?;
    ensure_positive_price(req.price_per_night)?;
    let room = state
        .room_service
        .create(CreateRoom {
            hotel_id,
            room_number: req.room_number,
            room_type: req.room_type,
            price_per_night: req.price_per_night,
            capacity: req.capacity,
            description: req.description,
            available: req.available.unwrap_or(true),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

/// PUT /api/rooms/{id}
pub async fn update_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RoomRequest>,
) -> Result<Json<RoomResponse>, ApiError> {
    validate_request(&req)?;
    ensure_positive_price(req.price_per_night)?;
    let room = state
        .room_service
        .update(UpdateRoom {
            id,
            room_number: req.room_number,
            room_type: req.room_type,
            price_per_night: req.price_per_night,
            capacity: req.capacity,
            description: req.description,
            available: req.available,
        })
        .await?;
    Ok(Json(room.into()))
}

/// DELETE /api/rooms/{id}
pub async fn delete_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.room_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn ensure_positive_price(price: Decimal) -> Result<(), AppError> {
    if price <= Decimal::ZERO {
        return Err(AppError::bad_request("Price per night must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_negative_prices_rejected() {
        assert!(ensure_positive_price(Decimal::ZERO).is_err());
        assert!(ensure_positive_price(Decimal::new(-100, 2)).is_err());
        assert!(ensure_positive_price(Decimal::new(100, 2)).is_ok());
    }
}
