//! User entity and role enum.

pub mod model;
pub mod role;

pub use model::{CreateUser, User};
pub use role::UserRole;
