//! Registration and login.

pub mod service;

pub use service::{AuthService, AuthTokens, Credentials, Registration};
