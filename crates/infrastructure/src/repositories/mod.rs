//! In-Memory Repositories

use std::collections::HashMap;
use std::sync::Mutex;

use catering_domain::{CateringJob, CateringJobRepository, DomainResult, JobId, JobStatus};

/// In-memory catering job repository
///
/// The id counter and the map live under one lock so that id assignment
/// and insertion are atomic for concurrent creates.
pub struct InMemoryCateringJobRepository {
    inner: Mutex<Inner>,
}

struct Inner {
    jobs: HashMap<JobId, CateringJob>,
    next_id: i64,
}

impl InMemoryCateringJobRepository {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                jobs: HashMap::new(),
                next_id: 0,
            }),
        }
    }
}

impl Default for InMemoryCateringJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CateringJobRepository for InMemoryCateringJobRepository {
    async fn save(&self, job: &CateringJob) -> DomainResult<CateringJob> {
        let mut inner = self.inner.lock().unwrap();
        let mut persisted = job.clone();

        let id = match persisted.id {
            Some(id) => id,
            None => {
                inner.next_id += 1;
                let id = JobId::new(inner.next_id);
                persisted.id = Some(id);
                id
            }
        };

        inner.jobs.insert(id, persisted.clone());
        Ok(persisted)
    }

    async fn exists_by_id(&self, id: JobId) -> DomainResult<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.jobs.contains_key(&id))
    }

    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<CateringJob>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.jobs.get(&id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<CateringJob>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.jobs.values().cloned().collect())
    }

    async fn find_by_status(&self, status: JobStatus) -> DomainResult<Vec<CateringJob>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .jobs
            .values()
            .filter(|j| j.status == status)
            .cloned()
            .collect())
    }
}
