//! Authentication gate middleware.
//!
//! Runs before every handler. Public routes (per the access policy) pass
//! through untouched; everything else must carry a valid bearer token.
//! On success a `RequestContext` is inserted into the request extensions
//! for the `AuthUser` extractor and the policy middleware.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use stayhub_auth::policy::AccessRule;
use stayhub_core::error::AppError;
use stayhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn authentication_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let method = request.method().as_str().to_owned();
    let path = request.uri().path().to_owned();

    if state.access_policy.rule_for(&method, &path) == AccessRule::Public {
        return Ok(next.run(request).await);
    }

    let token = bearer_token(&request)?;
    let claims = state.jwt_decoder.decode(token)?;

    let ctx = RequestContext::new(claims.uid, claims.sub, claims.role);
    request.extensions_mut().insert(ctx);

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Result<&str, AppError> {
    let header = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))
}
