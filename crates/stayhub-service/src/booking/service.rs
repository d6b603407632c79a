//! Booking admission engine and lifecycle operations.
//!
//! Validation happens here; the atomic conflict-check-and-insert lives in
//! `BookingRepository::create` so that the check-then-act window is closed
//! inside one transaction.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use stayhub_core::error::AppError;
use stayhub_database::repositories::booking::BookingRepository;
use stayhub_database::repositories::room::RoomRepository;
use stayhub_database::repositories::user::UserRepository;
use stayhub_entity::booking::{BookingDetails, BookingStatus, CreateBooking};

use crate::context::RequestContext;

/// A booking request as received from the API layer.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub room_id: Uuid,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

/// The booking admission engine.
#[derive(Debug, Clone)]
pub struct BookingService {
    booking_repo: Arc<BookingRepository>,
    room_repo: Arc<RoomRepository>,
    user_repo: Arc<UserRepository>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        room_repo: Arc<RoomRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            booking_repo,
            room_repo,
            user_repo,
        }
    }

    /// Admits a booking for the requesting user.
    ///
    /// Rejects unavailable rooms and inverted date ranges up front, prices
    /// the stay from the room's current nightly rate, then delegates the
    /// conflict check and insert to the repository's single transaction.
    /// Overlapping confirmed or completed bookings surface as Conflict.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: BookingRequest,
    ) -> Result<BookingDetails, AppError> {
        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let room = self
            .room_repo
            .find_by_id(req.room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {} not found", req.room_id)))?;

        if !room.available {
            return Err(AppError::bad_request("Room is not available for booking"));
        }

        if req.check_out_date <= req.check_in_date {
            return Err(AppError::bad_request(
                "Check-out date must be after check-in date",
            ));
        }

        let total_price = Self::price(room.price_per_night, req.check_in_date, req.check_out_date);

        let booking = self
            .booking_repo
            .create(&CreateBooking {
                user_id: user.id,
                room_id: room.id,
                check_in_date: req.check_in_date,
                check_out_date: req.check_out_date,
                total_price,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            user_id = %user.id,
            room_id = %room.id,
            nights = booking.nights(),
            %total_price,
            "Booking confirmed"
        );

        self.booking_repo
            .find_details(booking.id)
            .await?
            .ok_or_else(|| AppError::internal("Booking vanished after creation"))
    }

    /// Total price for a stay: nights times the nightly rate, snapshotted
    /// at admission time.
    fn price(price_per_night: Decimal, check_in: NaiveDate, check_out: NaiveDate) -> Decimal {
        let nights = (check_out - check_in).num_days();
        Decimal::from(nights) * price_per_night
    }

    /// Gets a booking with presentation fields by ID.
    pub async fn get_by_id(&self, id: Uuid) -> Result<BookingDetails, AppError> {
        self.booking_repo
            .find_details(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Lists the requesting user's own bookings.
    pub async fn get_mine(&self, ctx: &RequestContext) -> Result<Vec<BookingDetails>, AppError> {
        self.booking_repo.find_details_by_user(ctx.user_id).await
    }

    /// Lists bookings for a hotel.
    pub async fn get_by_hotel(&self, hotel_id: Uuid) -> Result<Vec<BookingDetails>, AppError> {
        self.booking_repo.find_details_by_hotel(hotel_id).await
    }

    /// Lists all bookings. Reached only through the admin route.
    pub async fn get_all(&self) -> Result<Vec<BookingDetails>, AppError> {
        self.booking_repo.find_all_details().await
    }

    /// Cancels a booking. Cancelling twice is a BadRequest.
    pub async fn cancel(&self, id: Uuid) -> Result<BookingDetails, AppError> {
        let booking = self
            .booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;

        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::bad_request("Booking is already cancelled"));
        }

        self.booking_repo
            .update_status(id, BookingStatus::Cancelled)
            .await?;

        info!(booking_id = %id, "Booking cancelled");

        self.get_by_id(id).await
    }

    /// Hard-deletes a booking.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let removed = self.booking_repo.delete(id).await?;
        if !removed {
            return Err(AppError::not_found(format!("Booking {id} not found")));
        }
        info!(booking_id = %id, "Booking deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_price_three_nights() {
        // 100.00 per night, 2024-06-01 to 2024-06-04 is 3 nights.
        let total = BookingService::price(Decimal::new(10000, 2), d("2024-06-01"), d("2024-06-04"));
        assert_eq!(total, Decimal::new(30000, 2));
    }

    #[test]
    fn test_price_single_night() {
        let total = BookingService::price(Decimal::new(7550, 2), d("2024-06-01"), d("2024-06-02"));
        assert_eq!(total, Decimal::new(7550, 2));
    }

    #[test]
    fn test_price_keeps_cents_exact() {
        // 33.33 for 3 nights must be exactly 99.99, not a float approximation.
        let total = BookingService::price(Decimal::new(3333, 2), d("2024-06-01"), d("2024-06-04"));
        assert_eq!(total, Decimal::new(9999, 2));
    }
}
