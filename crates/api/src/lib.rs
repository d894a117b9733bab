//! API Layer - HTTP Server
//!
//! Axum-based HTTP API for the catering job service

pub mod handlers;
pub mod middleware;
pub mod routes;

// Re-export main server components
pub use handlers::AppState;
pub use middleware::{add_request_id, cors_layer};
pub use routes::create_router;
