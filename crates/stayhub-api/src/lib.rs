//! HTTP layer for StayHub.
//!
//! Owns the axum router, application state, middleware (authentication
//! gate and access policy), DTOs, and the `AppError` to HTTP mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
