//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stayhub_entity::booking::{BookingDetails, BookingStatus};
use stayhub_entity::hotel::Hotel;
use stayhub_entity::room::{Room, RoomType};
use stayhub_entity::user::UserRole;
use stayhub_service::auth::AuthTokens;

/// Token issued on registration or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// Authenticated username.
    pub username: String,
    /// Authenticated role.
    pub role: UserRole,
}

impl From<AuthTokens> for AuthResponse {
    fn from(t: AuthTokens) -> Self {
        Self {
            token: t.token,
            expires_at: t.expires_at,
            username: t.username,
            role: t.role,
        }
    }
}

/// Hotel representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelResponse {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub stars: i32,
    pub description: Option<String>,
    /// Number of rooms; included only on single-hotel reads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_count: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl HotelResponse {
    pub fn from_hotel(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            address: hotel.address,
            city: hotel.city,
            stars: hotel.stars,
            description: hotel.description,
            room_count: None,
            created_at: hotel.created_at,
        }
    }

    pub fn with_room_count(hotel: Hotel, room_count: i64) -> Self {
        Self {
            room_count: Some(room_count),
            ..Self::from_hotel(hotel)
        }
    }
}

/// Room representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: Uuid,
    pub hotel_id: Uuid,
    pub room_number: String,
    pub room_type: RoomType,
    pub price_per_night: Decimal,
    pub capacity: i32,
    pub description: Option<String>,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            hotel_id: room.hotel_id,
            room_number: room.room_number,
            room_type: room.room_type,
            price_per_night: room.price_per_night,
            capacity: room.capacity,
            description: room.description,
            available: room.available,
            created_at: room.created_at,
        }
    }
}

/// Booking representation with joined presentation fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub nights: i64,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub user_name: String,
    pub room_number: String,
    pub hotel_name: String,
    pub created_at: DateTime<Utc>,
}

impl From<BookingDetails> for BookingResponse {
    fn from(b: BookingDetails) -> Self {
        let nights = b.nights();
        Self {
            id: b.id,
            user_id: b.user_id,
            room_id: b.room_id,
            check_in_date: b.check_in_date,
            check_out_date: b.check_out_date,
            nights,
            total_price: b.total_price,
            status: b.status,
            user_name: b.user_name,
            room_number: b.room_number,
            hotel_name: b.hotel_name,
            created_at: b.created_at,
        }
    }
}

/// Health probe body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
