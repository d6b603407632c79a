//! Booking entity model and date-range overlap semantics.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;

/// Two half-open date intervals `[a_in, a_out)` and `[b_in, b_out)`
/// overlap iff `a_in < b_out && b_in < a_out`.
///
/// The check-out day itself is not occupied, so back-to-back bookings
/// (one checking out the day the next checks in) do not overlap.
pub fn ranges_overlap(
    a_in: NaiveDate,
    a_out: NaiveDate,
    b_in: NaiveDate,
    b_out: NaiveDate,
) -> bool {
    a_in < b_out && b_in < a_out
}

/// A room reservation for a date range.
///
/// Created only through the booking admission engine; mutated only by
/// status transition, never re-dated. `total_price` is a snapshot taken
/// at creation time and is unaffected by later room price changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The user who made the booking.
    pub user_id: Uuid,
    /// The booked room.
    pub room_id: Uuid,
    /// Check-in date (inclusive).
    pub check_in_date: NaiveDate,
    /// Check-out date (exclusive; strictly after check-in).
    pub check_out_date: NaiveDate,
    /// Snapshot total price: nights × room price per night at creation.
    pub total_price: Decimal,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Number of nights, i.e. the date difference in whole days.
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }

    /// Whether this booking's interval overlaps the given half-open range.
    pub fn overlaps(&self, check_in: NaiveDate, check_out: NaiveDate) -> bool {
        ranges_overlap(self.check_in_date, self.check_out_date, check_in, check_out)
    }
}

/// Data required to create a new booking (already validated by the
/// admission engine).
#[derive(Debug, Clone)]
pub struct CreateBooking {
    /// The booking user.
    pub user_id: Uuid,
    /// The booked room.
    pub room_id: Uuid,
    /// Check-in date.
    pub check_in_date: NaiveDate,
    /// Check-out date.
    pub check_out_date: NaiveDate,
    /// Snapshot total price.
    pub total_price: Decimal,
}

/// Booking joined with its user, room, and hotel presentation fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingDetails {
    /// Unique booking identifier.
    pub id: Uuid,
    /// The user who made the booking.
    pub user_id: Uuid,
    /// The booked room.
    pub room_id: Uuid,
    /// Check-in date (inclusive).
    pub check_in_date: NaiveDate,
    /// Check-out date (exclusive).
    pub check_out_date: NaiveDate,
    /// Snapshot total price.
    pub total_price: Decimal,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Booking user's full name.
    pub user_name: String,
    /// Room number within the hotel.
    pub room_number: String,
    /// Hotel name.
    pub hotel_name: String,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
}

impl BookingDetails {
    /// Number of nights, i.e. the date difference in whole days.
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_overlap_shared_night() {
        // Existing [2024-06-01, 2024-06-05); request [2024-06-04, 2024-06-06)
        // shares the night of 06-04.
        assert!(ranges_overlap(
            d("2024-06-01"),
            d("2024-06-05"),
            d("2024-06-04"),
            d("2024-06-06"),
        ));
    }

    #[test]
    fn test_back_to_back_does_not_overlap() {
        // Check-out day is vacatable same-day.
        assert!(!ranges_overlap(
            d("2024-06-01"),
            d("2024-06-05"),
            d("2024-06-05"),
            d("2024-06-07"),
        ));
    }

    #[test]
    fn test_contained_range_overlaps() {
        assert!(ranges_overlap(
            d("2024-06-01"),
            d("2024-06-10"),
            d("2024-06-03"),
            d("2024-06-04"),
        ));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            ("2024-06-01", "2024-06-05", "2024-06-04", "2024-06-06"),
            ("2024-06-01", "2024-06-05", "2024-06-05", "2024-06-07"),
        ];
        for (a, b, c, e) in cases {
            assert_eq!(
                ranges_overlap(d(a), d(b), d(c), d(e)),
                ranges_overlap(d(c), d(e), d(a), d(b)),
            );
        }
    }

    #[test]
    fn test_nights() {
        let booking = Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            check_in_date: d("2024-06-01"),
            check_out_date: d("2024-06-04"),
            total_price: Decimal::new(30000, 2),
            status: BookingStatus::Confirmed,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(booking.nights(), 3);
    }
}
