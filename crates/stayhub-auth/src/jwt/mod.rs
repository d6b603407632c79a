//! Stateless JWT token service.
//!
//! Tokens are HS256-signed claims carrying the subject username, role,
//! issued-at, and expiry. There is no server-side session store; a token
//! is valid iff its signature verifies and it has not expired.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};
