//! Schema migration runner.
//!
//! Migration files from the workspace `migrations/` directory are embedded
//! at compile time and applied on startup, before the server starts
//! accepting traffic.

use sqlx::PgPool;
use tracing::info;

use stayhub_core::error::{AppError, ErrorKind};

/// Apply any unapplied schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Applying schema migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
        })?;

    info!("Schema is up to date");
    Ok(())
}
