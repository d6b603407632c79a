//! Registration and login flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use stayhub_auth::jwt::JwtEncoder;
use stayhub_auth::password::PasswordHasher;
use stayhub_core::error::AppError;
use stayhub_database::repositories::user::UserRepository;
use stayhub_entity::user::{CreateUser, User, UserRole};

/// Data collected at registration, already validated at the API edge.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
}

/// Login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub username: String,
    pub role: UserRole,
}

/// Handles registration and login.
#[derive(Debug, Clone)]
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            encoder,
        }
    }

    /// Registers a regular user and issues a token.
    pub async fn register(&self, req: Registration) -> Result<AuthTokens, AppError> {
        self.register_with_role(req, UserRole::User).await
    }

    /// Registers an administrator and issues a token.
    pub async fn register_admin(&self, req: Registration) -> Result<AuthTokens, AppError> {
        self.register_with_role(req, UserRole::Admin).await
    }

    async fn register_with_role(
        &self,
        req: Registration,
        role: UserRole,
    ) -> Result<AuthTokens, AppError> {
        if self.user_repo.username_exists(&req.username).await? {
            return Err(AppError::bad_request(format!(
                "Username '{}' is already taken",
                req.username
            )));
        }
        if self.user_repo.email_exists(&req.email).await? {
            return Err(AppError::bad_request("Email is already in use"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: req.username,
                email: req.email,
                password_hash,
                full_name: req.full_name,
                phone: req.phone,
                role,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, ?role, "User registered");

        self.issue(&user)
    }

    /// Authenticates a user by username and password.
    ///
    /// Unknown username and wrong password produce the same message so the
    /// endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, creds: Credentials) -> Result<AuthTokens, AppError> {
        let user = self
            .user_repo
            .find_by_username(&creds.username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

        let valid = self
            .hasher
            .verify_password(&creds.password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid username or password"));
        }

        info!(user_id = %user.id, username = %user.username, "User logged in");

        self.issue(&user)
    }

    fn issue(&self, user: &User) -> Result<AuthTokens, AppError> {
        let issued = self.encoder.issue(user.id, &user.username, user.role)?;
        Ok(AuthTokens {
            token: issued.token,
            expires_at: issued.expires_at,
            username: user.username.clone(),
            role: user.role,
        })
    }
}
