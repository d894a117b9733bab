//! Job Management Bounded Context
//!
//! Manages catering job records from creation through updates
//! - CateringJob aggregate root
//! - Typed partial-update value object
//! - Catering job repository port

pub mod entities;
pub mod repositories;

// Re-exports
pub use entities::{CateringJob, CateringJobPatch, JobStatus};
pub use repositories::CateringJobRepository;
