//! Server bootstrap: configuration and dependency wiring

use std::sync::Arc;
use std::time::Duration;

use catering_api::AppState;
use catering_application::{CateringJobService, StatsReporter};
use catering_infrastructure::InMemoryCateringJobRepository;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub stats_interval: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let port = std::env::var("CATERING_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        // The upstream schedule fired every 10 seconds
        let stats_interval_secs = std::env::var("CATERING_STATS_INTERVAL_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()?;

        Ok(Self {
            port,
            stats_interval: Duration::from_secs(stats_interval_secs),
        })
    }
}

/// Wired application components
pub struct ServerComponents {
    pub state: AppState,
    pub stats_reporter: StatsReporter,
}

/// Builds the dependency graph: repository into service and reporter,
/// service into handler state. No ambient registry anywhere.
pub fn build_components(config: &ServerConfig) -> ServerComponents {
    let job_repo = Arc::new(InMemoryCateringJobRepository::new());
    let job_service = Arc::new(CateringJobService::new(job_repo.clone()));
    let stats_reporter = StatsReporter::new(job_repo, config.stats_interval);

    ServerComponents {
        state: AppState { job_service },
        stats_reporter,
    }
}
