//! Repository implementations.
//!
//! Each repository wraps the shared `PgPool` and exposes the lookup/save
//! operations consumed by the service layer. Database errors are mapped
//! into [`stayhub_core::AppError`] at this boundary.

pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;

pub use booking::BookingRepository;
pub use hotel::HotelRepository;
pub use room::RoomRepository;
pub use user::UserRepository;
