//! Room inventory operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_database::repositories::hotel::HotelRepository;
use stayhub_database::repositories::room::RoomRepository;
use stayhub_entity::room::{CreateRoom, Room, UpdateRoom};

/// Handles room CRUD and availability listings.
#[derive(Debug, Clone)]
pub struct RoomService {
    room_repo: Arc<RoomRepository>,
    hotel_repo: Arc<HotelRepository>,
}

impl RoomService {
    /// Creates a new room service.
    pub fn new(room_repo: Arc<RoomRepository>, hotel_repo: Arc<HotelRepository>) -> Self {
        Self {
            room_repo,
            hotel_repo,
        }
    }

    /// Gets a room by ID.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Room, AppError> {
        self.room_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    /// Lists a hotel's rooms. NotFound if the hotel does not exist.
    pub async fn get_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Room>, AppError> {
        self.ensure_hotel(hotel_id).await?;
        self.room_repo.find_by_hotel(hotel_id).await
    }

    /// Lists all rooms flagged available.
    pub async fn get_available(&self) -> Result<Vec<Room>, AppError> {
        self.room_repo.find_available().await
    }

    /// Lists a hotel's rooms flagged available.
    pub async fn get_available_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<Room>, AppError> {
        self.ensure_hotel(hotel_id).await?;
        self.room_repo.find_available_by_hotel(hotel_id).await
    }

    /// Creates a room under a hotel. NotFound if the hotel does not exist.
    pub async fn create(&self, data: CreateRoom) -> Result<Room, AppError> {
        self.ensure_hotel(data.hotel_id).await?;
        let room = self.room_repo.create(&data).await?;
        info!(room_id = %room.id, hotel_id = %room.hotel_id, number = %room.room_number, "Room created");
        Ok(room)
    }

    /// Updates a room. NotFound if it does not exist.
    pub async fn update(&self, data: UpdateRoom) -> Result<Room, AppError> {
        let room = self.room_repo.update(&data).await?;
        info!(room_id = %room.id, "Room updated");
        Ok(room)
    }

    /// Deletes a room. NotFound if it does not exist.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let removed = self.room_repo.delete(id).await?;
        if !removed {
            return Err(AppError::not_found(format!("Room {id} not found")));
        }
        info!(room_id = %id, "Room deleted");
        Ok(())
    }

    async fn ensure_hotel(&self, hotel_id: Uuid) -> Result<(), AppError> {
        self.hotel_repo
            .find_by_id(hotel_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {hotel_id} not found")))?;
        Ok(())
    }
}
