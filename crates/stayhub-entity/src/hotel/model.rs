//! Hotel entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hotel holding zero or more rooms.
///
/// Rooms reference their hotel by id; the hotel does not embed them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Hotel {
    /// Unique hotel identifier.
    pub id: Uuid,
    /// Hotel name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Star rating (1-5).
    pub stars: i32,
    /// Free-form description.
    pub description: Option<String>,
    /// When the hotel was created.
    pub created_at: DateTime<Utc>,
    /// When the hotel was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new hotel.
#[derive(Debug, Clone)]
pub struct CreateHotel {
    /// Hotel name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Star rating (1-5).
    pub stars: i32,
    /// Free-form description.
    pub description: Option<String>,
}

/// Data for updating an existing hotel.
#[derive(Debug, Clone)]
pub struct UpdateHotel {
    /// The hotel ID to update.
    pub id: Uuid,
    /// New name.
    pub name: String,
    /// New address.
    pub address: String,
    /// New city.
    pub city: String,
    /// New star rating.
    pub stars: i32,
    /// New description.
    pub description: Option<String>,
}
