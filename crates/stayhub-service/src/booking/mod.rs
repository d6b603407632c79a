//! Booking admission and lifecycle.

pub mod service;

pub use service::{BookingRequest, BookingService};
