use axum::{
    routing::{get, post},
    Router,
};

use crate::server::AppState;

use super::handlers::{create_notification, get_notifications};
use super::health::health;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        // Notification records
        .route("/notifications", get(get_notifications))
        .route("/notification", post(create_notification))
}
