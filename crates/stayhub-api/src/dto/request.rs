//! Request DTOs with validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use stayhub_entity::room::RoomType;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 50, message = "must be 3 to 50 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    /// Plaintext password. The configured minimum length is enforced in
    /// the handler, which has access to `AuthConfig`.
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
    /// Full display name.
    #[validate(length(min = 1, message = "is required"))]
    pub full_name: String,
    /// Contact phone number.
    pub phone: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "is required"))]
    pub password: String,
}

/// Create or update hotel request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HotelRequest {
    /// Hotel name.
    #[validate(length(min = 1, max = 255, message = "is required"))]
    pub name: String,
    /// Street address.
    #[validate(length(min = 1, message = "is required"))]
    pub address: String,
    /// City.
    #[validate(length(min = 1, message = "is required"))]
    pub city: String,
    /// Star rating.
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub stars: i32,
    /// Free-form description.
    pub description: Option<String>,
}

/// Create or update room request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoomRequest {
    /// Room number within the hotel.
    #[validate(length(min = 1, max = 50, message = "is required"))]
    pub room_number: String,
    /// Room category.
    pub room_type: RoomType,
    /// Price per night. Positivity is checked in the handler since
    /// `validator` ranges do not cover `Decimal`.
    pub price_per_night: Decimal,
    /// Guest capacity.
    #[validate(range(min = 1, message = "must be positive"))]
    pub capacity: i32,
    /// Free-form description.
    pub description: Option<String>,
    /// Availability toggle; creation defaults to true when omitted.
    pub available: Option<bool>,
}

/// Create booking request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    /// The room to book.
    pub room_id: Uuid,
    /// Check-in date (inclusive).
    pub check_in_date: NaiveDate,
    /// Check-out date (exclusive; must be after check-in).
    pub check_out_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::validate_request;

    #[test]
    fn test_register_rejects_empty_password() {
        let req = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: String::new(),
            full_name: "Alice Doe".to_string(),
            phone: None,
        };
        let err = validate_request(&req).unwrap_err();
        assert!(err.field_errors.unwrap().contains_key("password"));
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let req = RegisterRequest {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "long enough".to_string(),
            full_name: "Alice Doe".to_string(),
            phone: None,
        };
        let err = validate_request(&req).unwrap_err();
        assert!(err.field_errors.unwrap().contains_key("email"));
    }

    #[test]
    fn test_hotel_rejects_out_of_range_stars() {
        let req = HotelRequest {
            name: "Grand".to_string(),
            address: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            stars: 6,
            description: None,
        };
        let err = validate_request(&req).unwrap_err();
        assert!(err.field_errors.unwrap().contains_key("stars"));
    }

    #[test]
    fn test_valid_booking_request_passes() {
        let req = CreateBookingRequest {
            room_id: Uuid::new_v4(),
            check_in_date: "2024-06-01".parse().unwrap(),
            check_out_date: "2024-06-04".parse().unwrap(),
        };
        assert!(validate_request(&req).is_ok());
    }
}
