//! Application Layer
//!
//! Orchestrates domain logic between the HTTP boundary and the repository

pub mod catering_job_service;
pub mod stats_reporter;

// Re-exports
pub use catering_job_service::CateringJobService;
pub use stats_reporter::StatsReporter;
