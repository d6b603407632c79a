//! Business services for StayHub.
//!
//! Services encapsulate the domain rules between the HTTP layer and the
//! repositories. They know nothing about HTTP; all failures are `AppError`
//! values translated at the API edge.

pub mod auth;
pub mod booking;
pub mod context;
pub mod hotel;
pub mod room;

pub use auth::AuthService;
pub use booking::BookingService;
pub use context::RequestContext;
pub use hotel::HotelService;
pub use room::RoomService;
