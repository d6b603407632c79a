//! Health check handler.

use axum::Json;

use crate::dto::response::HealthResponse;

/// GET /api/health
///
/// Liveness probe; does not touch the database.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
    })
}
