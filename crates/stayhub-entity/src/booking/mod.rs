//! Booking entity and status enum.

pub mod model;
pub mod status;

pub use model::{Booking, BookingDetails, CreateBooking, ranges_overlap};
pub use status::BookingStatus;
