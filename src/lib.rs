// Shared infrastructure
pub mod config;
pub mod error;

// Domain layer (business logic)
pub mod notification;
pub mod store;
pub mod ulid;

// Application layer
pub mod api;
pub mod server;
