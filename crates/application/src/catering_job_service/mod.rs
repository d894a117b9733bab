//! Application Service for Catering Job Management

use std::sync::Arc;

use catering_domain::{
    CateringJob, CateringJobPatch, CateringJobRepository, DomainError, DomainResult, JobId,
    JobStatus,
};

/// Enforces existence and data-completeness rules around CRUD operations.
///
/// Holds no cached copies across calls; every operation re-reads from the
/// repository. Each call is at most two repository interactions.
pub struct CateringJobService {
    job_repo: Arc<dyn CateringJobRepository>,
}

impl CateringJobService {
    pub fn new(job_repo: Arc<dyn CateringJobRepository>) -> Self {
        Self { job_repo }
    }

    /// Returns every record in store iteration order
    pub async fn list_jobs(&self) -> DomainResult<Vec<CateringJob>> {
        self.job_repo.find_all().await
    }

    /// Returns the records whose status equals the given value
    pub async fn list_jobs_by_status(&self, status: JobStatus) -> DomainResult<Vec<CateringJob>> {
        self.job_repo.find_by_status(status).await
    }

    pub async fn get_job(&self, id: JobId) -> DomainResult<CateringJob> {
        self.job_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Catering job {id} not found")))
    }

    /// Creates a new job. Any caller-supplied id is discarded; the store
    /// assigns one on save.
    pub async fn create_job(&self, mut job: CateringJob) -> DomainResult<CateringJob> {
        job.id = None;
        self.job_repo.save(&job).await
    }

    /// Replaces every mutable field of an existing job. The record keeps
    /// the path-supplied id even when the payload carries a different one.
    pub async fn replace_job(&self, id: JobId, mut job: CateringJob) -> DomainResult<CateringJob> {
        if !self.job_repo.exists_by_id(id).await? {
            return Err(DomainError::NotFound(format!("Catering job {id} not found")));
        }

        job.id = Some(id);
        self.job_repo.save(&job).await
    }

    /// Applies a partial update to an existing job. The patch must carry
    /// `menu`; only the fields present in it are overwritten.
    pub async fn patch_job(&self, id: JobId, patch: CateringJobPatch) -> DomainResult<CateringJob> {
        let mut job = self
            .job_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Catering job {id} not found")))?;

        if patch.menu.is_none() {
            return Err(DomainError::Validation("menu is required".to_string()));
        }

        job.apply_patch(&patch);
        self.job_repo.save(&job).await
    }
}
