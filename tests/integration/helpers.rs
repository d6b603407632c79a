//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use stayhub_core::config::{AppConfig, AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig};

/// Test application context.
///
/// Tests seed their own uniquely named users, hotels, and rooms instead of
/// wiping tables, so the suite can run its tests in parallel against one
/// database.
pub struct TestApp {
    /// The axum router for making test requests.
    pub router: Router,
    /// Database pool for direct queries.
    pub db_pool: PgPool,
}

impl TestApp {
    /// Connects to the database named by `STAYHUB_TEST_DATABASE_URL` and
    /// runs migrations. Returns `None` when the variable is unset so tests
    /// can skip themselves.
    pub async fn new() -> Option<Self> {
        let url = std::env::var("STAYHUB_TEST_DATABASE_URL").ok()?;

        let config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                shutdown_grace_seconds: 1,
                cors: Default::default(),
            },
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 0,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            auth: AuthConfig {
                jwt_secret: "integration-test-secret".to_string(),
                jwt_ttl_minutes: 60,
                password_min_length: 8,
            },
            logging: LoggingConfig::default(),
        };

        let db_pool = stayhub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        stayhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let state = stayhub_api::state::AppState::new(config, db_pool.clone());
        let router = stayhub_api::router::build_router(state);

        Some(Self { router, db_pool })
    }

    /// Registers a user through the API and returns their bearer token.
    pub async fn register_user(&self, username: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "email": format!("{username}@test.example"),
            "password": "password123",
            "full_name": "Test User",
        });

        let response = self
            .request("POST", "/api/auth/register", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in register response")
            .to_string()
    }

    /// Inserts a hotel with a single available room and returns the room ID.
    pub async fn seed_room(&self) -> Uuid {
        let hotel_id: Uuid = sqlx::query_scalar(
            "INSERT INTO hotels (name, address, city, stars)
             VALUES ('Harbor View', '1 Pier Road', 'Portsmouth', 4)
             RETURNING id",
        )
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to insert test hotel");

        sqlx::query_scalar(
            "INSERT INTO rooms (hotel_id, room_number, room_type, price_per_night, capacity)
             VALUES ($1, '101', 'standard', 120.00, 2)
             RETURNING id",
        )
        .bind(hotel_id)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to insert test room")
    }

    /// Make an HTTP request to the test app.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(json_request(method, path, body, token))
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Builds a JSON request, usable directly with cloned routers when a test
/// needs to drive requests from separate tasks.
pub fn json_request(
    method: &str,
    path: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> Request<Body> {
    let body_str = body
        .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
        .unwrap_or_default();

    let mut req = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json");

    if let Some(token) = token {
        req = req.header("Authorization", format!("Bearer {}", token));
    }

    req.body(Body::from(body_str)).expect("Failed to build request")
}

/// Appends a random suffix so parallel tests and repeated runs never
/// collide on unique columns.
pub fn unique(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &suffix[..8])
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
