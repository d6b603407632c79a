//! # stayhub-database
//!
//! PostgreSQL connection pool management, migrations, and repository
//! implementations for StayHub.

pub mod connection;
pub mod migration;
pub mod repositories;
