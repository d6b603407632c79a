//! Hotel handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use stayhub_entity::hotel::{CreateHotel, UpdateHotel};

use crate::dto::request::HotelRequest;
use crate::dto::response::HotelResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/hotels
pub async fn list_hotels(
    State(state): State<AppState>,
) -> Result<Json<Vec<HotelResponse>>, ApiError> {
    let hotels = state.hotel_service.get_all().await?;
    Ok(Json(hotels.into_iter().map(HotelResponse::from_hotel).collect()))
}

/// GET /api/hotels/{id}
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HotelResponse>, ApiError> {
    let hotel = state.hotel_service.get_by_id(id).await?;
    let room_count = state.hotel_service.room_count(id).await?;
    Ok(Json(HotelResponse::with_room_count(hotel, room_count)))
}

/// POST /api/hotels
pub async fn create_hotel(
    State(state): State<AppState>,
    Json(req): Json<HotelRequest>,
) -> Result<(StatusCode, Json<HotelResponse>), ApiError> {
    validate_request(&req)?;
    let hotel = state
        .hotel_service
        .create(CreateHotel {
            name: req.name,
            address: req.address,
            city: req.city,
            stars: req.stars,
            description: req.description,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(HotelResponse::from_hotel(hotel))))
}

/// PUT /api/hotels/{id}
pub async fn update_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<HotelRequest>,
) -> Result<Json<HotelResponse>, ApiError> {
    validate_request(&req)?;
    let hotel = state
        .hotel_service
        .update(UpdateHotel {
            id,
            name: req.name,
            address: req.address,
            city: req.city,
            stars: req.stars,
            description: req.description,
        })
        .await?;
    Ok(Json(HotelResponse::from_hotel(hotel)))
}

/// DELETE /api/hotels/{id}
pub async fn delete_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.hotel_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
