//! HTTP Routes
//!
//! Defines the API routes for the application

use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::handlers::{self, AppState};

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/cateringJobs", get(handlers::list_jobs_handler))
        .route("/cateringJobs", post(handlers::create_job_handler))
        .route(
            "/cateringJobs/findByStatus",
            get(handlers::find_by_status_handler),
        )
        .route("/cateringJobs/{id}", get(handlers::get_job_handler))
        .route("/cateringJobs/{id}", put(handlers::replace_job_handler))
        .route("/cateringJobs/{id}", patch(handlers::patch_job_handler))
        .route("/health", get(handlers::health_check_handler))
}
