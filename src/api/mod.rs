//! API layer - HTTP endpoint handlers organized by domain.

mod handlers;
mod health;
mod routes;

// Re-export all handlers for use in server/app.rs
pub use handlers::{create_notification, get_notifications};
pub use health::health;
pub use routes::api_routes;
