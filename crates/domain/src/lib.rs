//! Domain Core - Business Logic and Shared Types
//!
//! This crate contains the catering job aggregate, its value objects,
//! the repository port, and shared error types.

pub mod job_management;
pub mod shared_kernel;

// Re-exports
pub use job_management::{CateringJob, CateringJobPatch, CateringJobRepository, JobStatus};
pub use shared_kernel::{DomainError, DomainResult, JobId};
