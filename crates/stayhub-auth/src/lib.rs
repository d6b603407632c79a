//! # stayhub-auth
//!
//! Authentication and authorization primitives for StayHub: the stateless
//! JWT token service, Argon2id password hashing, and the static
//! route-to-role access policy.

pub mod jwt;
pub mod password;
pub mod policy;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use policy::{AccessPolicy, AccessRule};
