//! Hotel inventory management.

pub mod service;

pub use service::HotelService;
