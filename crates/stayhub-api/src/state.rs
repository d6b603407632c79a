//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use stayhub_auth::jwt::decoder::JwtDecoder;
use stayhub_auth::jwt::encoder::JwtEncoder;
use stayhub_auth::password::hasher::PasswordHasher;
use stayhub_auth::policy::AccessPolicy;
use stayhub_core::config::AppConfig;

use stayhub_database::repositories::booking::BookingRepository;
use stayhub_database::repositories::hotel::HotelRepository;
use stayhub_database::repositories::room::RoomRepository;
use stayhub_database::repositories::user::UserRepository;

use stayhub_service::auth::AuthService;
use stayhub_service::booking::BookingService;
use stayhub_service::hotel::HotelService;
use stayhub_service::room::RoomService;

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,

    /// JWT token encoder.
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Route access policy table.
    pub access_policy: AccessPolicy,

    /// Registration and login service.
    pub auth_service: Arc<AuthService>,
    /// Hotel inventory service.
    pub hotel_service: Arc<HotelService>,
    /// Room inventory service.
    pub room_service: Arc<RoomService>,
    /// Booking admission engine.
    pub booking_service: Arc<BookingService>,
}

impl AppState {
    /// Wires repositories and services from a configuration and pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let hotel_repo = Arc::new(HotelRepository::new(db_pool.clone()));
        let room_repo = Arc::new(RoomRepository::new(db_pool.clone()));
        let booking_repo = Arc::new(BookingRepository::new(db_pool));

        let auth_service = Arc::new(AuthService::new(
            user_repo.clone(),
            password_hasher,
            jwt_encoder.clone(),
        ));
        let hotel_service = Arc::new(HotelService::new(hotel_repo.clone()));
        let room_service = Arc::new(RoomService::new(room_repo.clone(), hotel_repo));
        let booking_service = Arc::new(BookingService::new(booking_repo, room_repo, user_repo));

        Self {
            config: Arc::new(config),
            jwt_encoder,
            jwt_decoder,
            access_policy: AccessPolicy::new(),
            auth_service,
            hotel_service,
            room_service,
            booking_service,
        }
    }
}
