// Library root - the binary and the integration tests both build the router from here

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod websocket;

pub use app_state::AppState;
pub use config::{Config, LogFormat};
pub use error::{ApiError, StoreError, ValidationError};

use axum::{
    routing::get,
    Router,
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .route("/skills", get(handlers::list_skills))
        .route(
            "/swap_requests",
            get(handlers::list_swap_requests).post(handlers::create_swap_request),
        )
        .route("/profiles", get(handlers::list_public_profiles))
        .route(
            "/profiles/:user_id",
            get(handlers::get_profile)
                .put(handlers::save_profile)
                .patch(handlers::save_profile),
        )
        .route("/ws/profiles", get(websocket::directory_socket))
        .route("/ws/profiles/:user_id", get(websocket::profile_socket))
        .layer(axum::middleware::from_fn(middleware::security_headers_middleware))
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .with_state(state)
}
