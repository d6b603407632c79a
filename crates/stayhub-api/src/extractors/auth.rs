//! `AuthUser` extractor that reads the request context placed by the
//! authentication gate.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use stayhub_core::error::AppError;
use stayhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// The gate middleware validates the token and stores a `RequestContext`
/// in the request extensions; this extractor only reads it. A missing
/// context means the route was wired without the gate, which is a bug,
/// but it still fails closed as Unauthorized.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized("Authentication required").into())
    }
}
