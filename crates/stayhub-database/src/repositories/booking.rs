//! Booking repository implementation.
//!
//! `create` is the atomic section of the booking admission engine: the
//! overlap check and the insert run in one transaction holding a row
//! lock on the room, so two concurrent writers for the same room are
//! serialized and the loser observes the winner's booking. The
//! `bookings_no_overlap` exclusion constraint backstops the invariant at
//! the schema level; its violation also surfaces as Conflict.

use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use stayhub_core::error::{AppError, ErrorKind};
use stayhub_core::result::AppResult;
use stayhub_entity::booking::{Booking, BookingDetails, BookingStatus, CreateBooking};

/// Columns for the booking presentation view (user, room, and hotel
/// fields resolved by explicit joins).
const DETAILS_SELECT: &str = "SELECT b.id, b.user_id, b.room_id, b.check_in_date, \
     b.check_out_date, b.total_price, b.status, \
     u.full_name AS user_name, r.room_number, h.name AS hotel_name, b.created_at \
     FROM bookings b \
     JOIN users u ON u.id = b.user_id \
     JOIN rooms r ON r.id = b.room_id \
     JOIN hotels h ON h.id = r.hotel_id";

/// Repository for booking persistence and queries.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Atomically check for conflicting bookings and insert a new
    /// Confirmed booking.
    ///
    /// Locks the room row for the duration of the transaction so that a
    /// concurrent create for the same room waits, re-reads the committed
    /// booking set, and fails with Conflict instead of silently
    /// double-booking.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let locked: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM rooms WHERE id = $1 FOR UPDATE")
                .bind(data.room_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to lock room", e)
                })?;

        if locked.is_none() {
            return Err(AppError::not_found(format!(
                "Room {} not found",
                data.room_id
            )));
        }

        // Half-open interval overlap: [a, b) and [c, d) overlap iff
        // a < d AND c < b. Cancelled bookings do not occupy their range.
        let conflicting: bool = sqlx::query_scalar(
            "SELECT EXISTS( \
                 SELECT 1 FROM bookings \
                 WHERE room_id = $1 \
                   AND status IN ('confirmed', 'completed') \
                   AND check_in_date < $3 \
                   AND check_out_date > $2)",
        )
        .bind(data.room_id)
        .bind(data.check_in_date)
        .bind(data.check_out_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check booking conflicts", e)
        })?;

        if conflicting {
            return Err(AppError::conflict(
                "Room is already booked for the requested dates",
            ));
        }

        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (user_id, room_id, check_in_date, check_out_date, \
                                   total_price, status) \
             VALUES ($1, $2, $3, $4, $5, 'confirmed') \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.room_id)
        .bind(data.check_in_date)
        .bind(data.check_out_date)
        .bind(data.total_price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("bookings_no_overlap") =>
            {
                warn!(room_id = %data.room_id, "Overlap constraint rejected concurrent booking");
                AppError::conflict("Room is already booked for the requested dates")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create booking", e),
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit booking", e)
        })?;

        Ok(booking)
    }

    /// Find a booking by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by id", e)
            })
    }

    /// Find a booking with presentation fields by primary key.
    pub async fn find_details(&self, id: Uuid) -> AppResult<Option<BookingDetails>> {
        sqlx::query_as::<_, BookingDetails>(&format!("{DETAILS_SELECT} WHERE b.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking details", e)
            })
    }

    /// List a user's bookings with presentation fields.
    pub async fn find_details_by_user(&self, user_id: Uuid) -> AppResult<Vec<BookingDetails>> {
        sqlx::query_as::<_, BookingDetails>(&format!(
            "{DETAILS_SELECT} WHERE b.user_id = $1 ORDER BY b.created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list bookings by user", e)
        })
    }

    /// List a hotel's bookings with presentation fields.
    pub async fn find_details_by_hotel(&self, hotel_id: Uuid) -> AppResult<Vec<BookingDetails>> {
        sqlx::query_as::<_, BookingDetails>(&format!(
            "{DETAILS_SELECT} WHERE r.hotel_id = $1 ORDER BY b.created_at DESC"
        ))
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list bookings by hotel", e)
        })
    }

    /// List all bookings with presentation fields.
    pub async fn find_all_details(&self) -> AppResult<Vec<BookingDetails>> {
        sqlx::query_as::<_, BookingDetails>(&format!(
            "{DETAILS_SELECT} ORDER BY b.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))
    }

    /// Update a booking's status.
    pub async fn update_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Hard-delete a booking by ID. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete booking", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
