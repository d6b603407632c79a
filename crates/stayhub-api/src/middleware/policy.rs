//! Access policy enforcement middleware.
//!
//! Runs after the authentication gate. Checks the authenticated role
//! against the static route table; an admin-only route with a non-admin
//! token is rejected with Forbidden.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use stayhub_auth::policy::AccessRule;
use stayhub_core::error::AppError;
use stayhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn enforce_access_policy(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let rule = state
        .access_policy
        .rule_for(request.method().as_str(), request.uri().path());

    match rule {
        AccessRule::Public => {}
        AccessRule::Authenticated | AccessRule::AdminOnly => {
            let ctx = request
                .extensions()
                .get::<RequestContext>()
                .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

            if !state.access_policy.is_satisfied(rule, ctx.role) {
                return Err(AppError::forbidden("Admin privileges required").into());
            }
        }
    }

    Ok(next.run(request).await)
}
