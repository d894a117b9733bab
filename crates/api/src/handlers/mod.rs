//! HTTP Handlers
//!
//! Request handlers for the catering job endpoints

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::{error, warn};

use catering_application::CateringJobService;
use catering_domain::{CateringJob, CateringJobPatch, DomainError, JobId, JobStatus};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub job_service: Arc<CateringJobService>,
}

/// Fixed body rendered for every client-visible failure. The upstream
/// exception handler collapses all failure kinds into this one message;
/// only the status code differentiates them.
const ERROR_BODY: &str = "Not found: Please try again";

/// Error surfaced to HTTP clients
#[derive(Debug)]
pub struct ApiError(StatusCode);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.0
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound(msg) => {
                warn!(details = %msg, "resource not found");
                Self(StatusCode::NOT_FOUND)
            }
            DomainError::Validation(msg) => {
                warn!(details = %msg, "invalid request");
                Self(StatusCode::BAD_REQUEST)
            }
            DomainError::Infrastructure(msg) => {
                error!(details = %msg, "infrastructure error");
                Self(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, ERROR_BODY).into_response()
    }
}

#[derive(Deserialize, Debug)]
pub struct StatusQuery {
    pub status: String,
}

pub async fn list_jobs_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CateringJob>>, ApiError> {
    Ok(Json(state.job_service.list_jobs().await?))
}

pub async fn get_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CateringJob>, ApiError> {
    Ok(Json(state.job_service.get_job(JobId::new(id)).await?))
}

pub async fn find_by_status_handler(
    State(state): State<AppState>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Vec<CateringJob>>, ApiError> {
    let status = JobStatus::from_str(&query.status)
        .map_err(|_| DomainError::Validation(format!("unknown status: {}", query.status)))?;

    Ok(Json(state.job_service.list_jobs_by_status(status).await?))
}

pub async fn create_job_handler(
    State(state): State<AppState>,
    Json(job): Json<CateringJob>,
) -> Result<Json<CateringJob>, ApiError> {
    Ok(Json(state.job_service.create_job(job).await?))
}

pub async fn replace_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(job): Json<CateringJob>,
) -> Result<Json<CateringJob>, ApiError> {
    Ok(Json(
        state.job_service.replace_job(JobId::new(id), job).await?,
    ))
}

pub async fn patch_job_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<CateringJobPatch>,
) -> Result<Json<CateringJob>, ApiError> {
    Ok(Json(
        state.job_service.patch_job(JobId::new(id), patch).await?,
    ))
}

pub async fn health_check_handler() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use catering_infrastructure::InMemoryCateringJobRepository;

    fn test_state() -> AppState {
        let job_repo = Arc::new(InMemoryCateringJobRepository::new());
        AppState {
            job_service: Arc::new(CateringJobService::new(job_repo)),
        }
    }

    fn sample_job() -> CateringJob {
        CateringJob {
            id: None,
            customer_name: "John Doe".to_string(),
            email: "johndoe@noreply.com".to_string(),
            menu: "Hot dog and fries".to_string(),
            no_of_guests: 1,
            phone_number: "0790000001".to_string(),
            status: JobStatus::NotStarted,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_job() {
        let state = test_state();

        let Json(created) = create_job_handler(State(state.clone()), Json(sample_job()))
            .await
            .unwrap();
        assert!(created.id.is_some());

        let Json(fetched) = get_job_handler(State(state), Path(created.id.unwrap().0))
            .await
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_job_missing_id_is_not_found() {
        let state = test_state();

        let err = get_job_handler(State(state), Path(42)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_find_by_status_rejects_unknown_status_text() {
        let state = test_state();

        let err = find_by_status_handler(
            State(state),
            Query(StatusQuery {
                status: "DELIVERED".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_patch_without_menu_is_bad_request() {
        let state = test_state();

        let Json(created) = create_job_handler(State(state.clone()), Json(sample_job()))
            .await
            .unwrap();

        let err = patch_job_handler(
            State(state),
            Path(created.id.unwrap().0),
            Json(CateringJobPatch::default()),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_replace_missing_id_is_not_found() {
        let state = test_state();

        let err = replace_job_handler(State(state), Path(-100), Json(sample_job()))
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
