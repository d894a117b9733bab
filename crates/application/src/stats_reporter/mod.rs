//! Scheduled Job Count Reporting

use std::sync::Arc;
use std::time::Duration;

use catering_domain::{CateringJobRepository, DomainResult};
use tracing::{error, info};

/// Periodically logs the number of catering jobs in the store.
///
/// The reporter never writes, so it shares the repository with request
/// handling without coordination.
#[derive(Clone)]
pub struct StatsReporter {
    job_repo: Arc<dyn CateringJobRepository>,
    interval: Duration,
}

impl StatsReporter {
    pub fn new(job_repo: Arc<dyn CateringJobRepository>, interval: Duration) -> Self {
        Self { job_repo, interval }
    }

    /// Starts the reporting loop
    pub fn start(&self) {
        let interval = self.interval;
        let reporter = self.clone();

        tokio::spawn(async move {
            info!("Stats reporter started with interval {:?}", interval);
            let mut ticker = tokio::time::interval(interval);

            loop {
                ticker.tick().await;
                if let Err(e) = reporter.report_order_stats().await {
                    error!("Error reporting order stats: {}", e);
                }
            }
        });
    }

    /// Performs one firing: a single `find_all` and one log line
    pub async fn report_order_stats(&self) -> DomainResult<usize> {
        let jobs = self.job_repo.find_all().await?;
        let count = jobs.len();

        info!("Number of jobs: {}", count);

        Ok(count)
    }
}
