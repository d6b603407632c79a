//! HTTP request handlers, grouped by domain.

pub mod auth;
pub mod booking;
pub mod health;
pub mod hotel;
pub mod room;
