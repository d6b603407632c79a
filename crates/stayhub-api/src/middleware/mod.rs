//! HTTP middleware: authentication gate, access policy, CORS.

pub mod cors;
pub mod gate;
pub mod policy;
