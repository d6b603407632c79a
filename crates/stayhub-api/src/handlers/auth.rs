//! Auth handlers: register, register-admin, login.

use std::collections::HashMap;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use stayhub_core::error::AppError;
use stayhub_service::auth::{Credentials, Registration};

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::AuthResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    validate_request(&req)?;
    enforce_password_policy(&req.password, state.config.auth.password_min_length)?;
    let tokens = state.auth_service.register(registration(req)).await?;
    Ok((StatusCode::CREATED, Json(tokens.into())))
}

/// POST /api/auth/register-admin
pub async fn register_admin(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    validate_request(&req)?;
    enforce_password_policy(&req.password, state.config.auth.password_min_length)?;
    let tokens = state.auth_service.register_admin(registration(req)).await?;
    Ok((StatusCode::CREATED, Json(tokens.into())))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    validate_request(&req)?;
    let tokens = state
        .auth_service
        .login(Credentials {
            username: req.username,
            password: req.password,
        })
        .await?;
    Ok(Json(tokens.into()))
}

/// Checks the configured password minimum, which `#[validate]` attributes
/// cannot express (they only take literals).
fn enforce_password_policy(password: &str, min_length: usize) -> Result<(), AppError> {
    if password.chars().count() < min_length {
        let mut fields = HashMap::new();
        fields.insert(
            "password".to_string(),
            format!("must be at least {min_length} characters"),
        );
        return Err(AppError::validation("Validation failed", fields));
    }
    Ok(())
}

fn registration(req: RegisterRequest) -> Registration {
    Registration {
        username: req.username,
        email: req.email,
        password: req.password,
        full_name: req.full_name,
        phone: req.phone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_policy_uses_configured_minimum() {
        let err = enforce_password_policy("short", 12).unwrap_err();
        assert_eq!(
            err.field_errors.unwrap().get("password").unwrap(),
            "must be at least 12 characters"
        );

        assert!(enforce_password_policy("short", 5).is_ok());
    }
}
