//! Room entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::room_type::RoomType;

/// A bookable hotel room.
///
/// The `available` flag is an administrative toggle, independent of
/// booking-derived occupancy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    /// Unique room identifier.
    pub id: Uuid,
    /// The hotel this room belongs to.
    pub hotel_id: Uuid,
    /// Room number within the hotel.
    pub room_number: String,
    /// Room category.
    pub room_type: RoomType,
    /// Price per night (positive).
    pub price_per_night: Decimal,
    /// Guest capacity (positive).
    pub capacity: i32,
    /// Free-form description.
    pub description: Option<String>,
    /// Administrative availability toggle.
    pub available: bool,
    /// When the room was created.
    pub created_at: DateTime<Utc>,
    /// When the room was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new room.
#[derive(Debug, Clone)]
pub struct CreateRoom {
    /// The hotel this room belongs to.
    pub hotel_id: Uuid,
    /// Room number within the hotel.
    pub room_number: String,
    /// Room category.
    pub room_type: RoomType,
    /// Price per night.
    pub price_per_night: Decimal,
    /// Guest capacity.
    pub capacity: i32,
    /// Free-form description.
    pub description: Option<String>,
    /// Availability toggle (defaults to true).
    pub available: bool,
}

/// Data for updating an existing room.
#[derive(Debug, Clone)]
pub struct UpdateRoom {
    /// The room ID to update.
    pub id: Uuid,
    /// New room number.
    pub room_number: String,
    /// New room category.
    pub room_type: RoomType,
    /// New price per night.
    pub price_per_night: Decimal,
    /// New guest capacity.
    pub capacity: i32,
    /// New description.
    pub description: Option<String>,
    /// New availability toggle, if given.
    pub available: Option<bool>,
}
