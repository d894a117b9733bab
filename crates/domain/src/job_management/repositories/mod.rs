//! Catering Job Repository Port
//!
//! Repository interface for persisting and retrieving catering jobs

use super::entities::{CateringJob, JobStatus};
use crate::shared_kernel::{DomainResult, JobId};

/// Repository port for the CateringJob aggregate
#[async_trait::async_trait]
pub trait CateringJobRepository: Send + Sync {
    /// Insert-or-update. Assigns a fresh id when the job has none and
    /// returns the persisted record.
    async fn save(&self, job: &CateringJob) -> DomainResult<CateringJob>;

    /// Checks whether a job with this id exists
    async fn exists_by_id(&self, id: JobId) -> DomainResult<bool>;

    /// Finds a job by its id
    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<CateringJob>>;

    /// Lists all jobs in store iteration order
    async fn find_all(&self) -> DomainResult<Vec<CateringJob>>;

    /// Lists jobs whose status equals the given value
    async fn find_by_status(&self, status: JobStatus) -> DomainResult<Vec<CateringJob>>;
}
