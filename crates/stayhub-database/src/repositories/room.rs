//! Room repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::room::{CreateRoom, Room, UpdateRoom};

/// Repository for room CRUD and availability queries.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    /// Create a new room repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a room by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find room by id", e))
    }

    /// List rooms belonging to a hotel.
    pub async fn find_by_hotel(&self, hotel_id: Uuid) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE hotel_id = $1 ORDER BY room_number ASC",
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list rooms by hotel", e))
    }

    /// List all rooms with the availability flag set.
    pub async fn find_available(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE available = TRUE ORDER BY room_number ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list available rooms", e))
    }

    /// List a hotel's rooms with the availability flag set.
    pub async fn find_available_by_hotel(&self, hotel_id: Uuid) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE hotel_id = $1 AND available = TRUE \
             ORDER BY room_number ASC",
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list available rooms by hotel",
                e,
            )
        })
    }

    /// Create a new room.
    pub async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "INSERT INTO rooms (hotel_id, room_number, room_type, price_per_night, \
                                capacity, description, available) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.hotel_id)
        .bind(&data.room_number)
        .bind(data.room_type)
        .bind(data.price_per_night)
        .bind(data.capacity)
        .bind(&data.description)
        .bind(data.available)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create room", e))
    }

    /// Update a room's fields. The availability flag only changes when given.
    pub async fn update(&self, data: &UpdateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            "UPDATE rooms SET room_number = $2, room_type = $3, price_per_night = $4, \
                              capacity = $5, description = $6, \
                              available = COALESCE($7, available), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.room_number)
        .bind(data.room_type)
        .bind(data.price_per_night)
        .bind(data.capacity)
        .bind(&data.description)
        .bind(data.available)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update room", e))?
        .ok_or_else(|| AppError::not_found(format!("Room {} not found", data.id)))
    }

    /// Delete a room by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete room", e))?;

        Ok(result.rows_affected() > 0)
    }
}
