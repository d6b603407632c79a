//! Hotel repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::hotel::{CreateHotel, Hotel, UpdateHotel};

/// Repository for hotel CRUD operations.
#[derive(Debug, Clone)]
pub struct HotelRepository {
    pool: PgPool,
}

impl HotelRepository {
    /// Create a new hotel repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a hotel by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Hotel>> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find hotel by id", e)
            })
    }

    /// List all hotels.
    pub async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM hotels ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list hotels", e))
    }

    /// Count rooms belonging to a hotel.
    pub async fn room_count(&self, hotel_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms WHERE hotel_id = $1")
            .bind(hotel_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count rooms", e))
    }

    /// Create a new hotel.
    pub async fn create(&self, data: &CreateHotel) -> AppResult<Hotel> {
        sqlx::query_as::<_, Hotel>(
            "INSERT INTO hotels (name, address, city, stars, description) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.city)
        .bind(data.stars)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create hotel", e))
    }

    /// Update a hotel's fields.
    pub async fn update(&self, data: &UpdateHotel) -> AppResult<Hotel> {
        sqlx::query_as::<_, Hotel>(
            "UPDATE hotels SET name = $2, address = $3, city = $4, stars = $5, \
                               description = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.city)
        .bind(data.stars)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update hotel", e))?
        .ok_or_else(|| AppError::not_found(format!("Hotel {} not found", data.id)))
    }

    /// Delete a hotel by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete hotel", e))?;

        Ok(result.rows_affected() > 0)
    }
}
