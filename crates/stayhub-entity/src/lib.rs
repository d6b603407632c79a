//! # stayhub-entity
//!
//! Domain entity models for StayHub: users, hotels, rooms, and bookings.
//!
//! Entities reference each other by identifier only. No entity holds a
//! live collection of its dependents; joins for presentation are explicit
//! queries in the database layer.

pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;
