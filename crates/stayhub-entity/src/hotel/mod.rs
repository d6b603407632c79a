//! Hotel entity.

pub mod model;

pub use model::{CreateHotel, Hotel, UpdateHotel};
