//! Infrastructure Layer
//!
//! Contains adapters for external integrations

pub mod repositories;

// Re-exports
pub use repositories::InMemoryCateringJobRepository;
