//! Hotel inventory operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_database::repositories::hotel::HotelRepository;
use stayhub_entity::hotel::{CreateHotel, Hotel, UpdateHotel};

/// Handles hotel CRUD. Writes reach this service only through admin routes.
#[derive(Debug, Clone)]
pub struct HotelService {
    hotel_repo: Arc<HotelRepository>,
}

impl HotelService {
    /// Creates a new hotel service.
    pub fn new(hotel_repo: Arc<HotelRepository>) -> Self {
        Self { hotel_repo }
    }

    /// Lists all hotels.
    pub async fn get_all(&self) -> Result<Vec<Hotel>, AppError> {
        self.hotel_repo.find_all().await
    }

    /// Gets a hotel by ID.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Hotel, AppError> {
        self.hotel_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Hotel {id} not found")))
    }

    /// Counts the rooms registered under a hotel.
    pub async fn room_count(&self, id: Uuid) -> Result<i64, AppError> {
        self.hotel_repo.room_count(id).await
    }

    /// Creates a hotel.
    pub async fn create(&self, data: CreateHotel) -> Result<Hotel, AppError> {
        let hotel = self.hotel_repo.create(&data).await?;
        info!(hotel_id = %hotel.id, name = %hotel.name, "Hotel created");
        Ok(hotel)
    }

    /// Updates a hotel. NotFound if it does not exist.
    pub async fn update(&self, data: UpdateHotel) -> Result<Hotel, AppError> {
        let hotel = self.hotel_repo.update(&data).await?;
        info!(hotel_id = %hotel.id, "Hotel updated");
        Ok(hotel)
    }

    /// Deletes a hotel. NotFound if it does not exist.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let removed = self.hotel_repo.delete(id).await?;
        if !removed {
            return Err(AppError::not_found(format!("Hotel {id} not found")));
        }
        info!(hotel_id = %id, "Hotel deleted");
        Ok(())
    }
}
