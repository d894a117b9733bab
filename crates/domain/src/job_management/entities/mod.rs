//! Catering Job Aggregate Root

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::shared_kernel::JobId;

/// Current status of a catering job
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    #[default]
    NotStarted,
    InProgress,
    Canceled,
    Completed,
}

impl FromStr for JobStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_STARTED" => Ok(Self::NotStarted),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "CANCELED" => Ok(Self::Canceled),
            "COMPLETED" => Ok(Self::Completed),
            _ => Err(()),
        }
    }
}

/// Catering job aggregate root
///
/// Serde attributes carry the wire representation: camelCase field names,
/// `id` absent or null before the store assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CateringJob {
    #[serde(default)]
    pub id: Option<JobId>,
    pub customer_name: String,
    pub email: String,
    pub menu: String,
    pub no_of_guests: u32,
    pub phone_number: String,
    #[serde(default)]
    pub status: JobStatus,
}

impl CateringJob {
    /// Overwrites only the fields present in the patch
    pub fn apply_patch(&mut self, patch: &CateringJobPatch) {
        if let Some(menu) = &patch.menu {
            self.menu = menu.clone();
        }
    }
}

/// Partial update for a catering job
///
/// One optional field per mutable attribute the patch endpoint recognizes;
/// today that is only `menu`. Unknown fields in a patch body are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CateringJobPatch {
    pub menu: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> CateringJob {
        CateringJob {
            id: Some(JobId::new(1)),
            customer_name: "John Doe".to_string(),
            email: "johndoe@noreply.com".to_string(),
            menu: "Hot dog and fries".to_string(),
            no_of_guests: 1,
            phone_number: "0790000001".to_string(),
            status: JobStatus::NotStarted,
        }
    }

    #[test]
    fn test_apply_patch_overwrites_menu_only() {
        let mut job = sample_job();
        let patch = CateringJobPatch {
            menu: Some("Hot dog and fries and ketchup".to_string()),
        };

        job.apply_patch(&patch);

        assert_eq!(job.menu, "Hot dog and fries and ketchup");
        assert_eq!(job.customer_name, "John Doe");
        assert_eq!(job.status, JobStatus::NotStarted);
    }

    #[test]
    fn test_apply_empty_patch_is_a_no_op() {
        let mut job = sample_job();
        let before = job.clone();

        job.apply_patch(&CateringJobPatch::default());

        assert_eq!(job, before);
    }

    #[test]
    fn test_job_status_from_str() {
        assert_eq!("NOT_STARTED".parse(), Ok(JobStatus::NotStarted));
        assert_eq!("IN_PROGRESS".parse(), Ok(JobStatus::InProgress));
        assert_eq!("CANCELED".parse(), Ok(JobStatus::Canceled));
        assert_eq!("COMPLETED".parse(), Ok(JobStatus::Completed));
        assert_eq!("DELIVERED".parse::<JobStatus>(), Err(()));
    }

    #[test]
    fn test_wire_representation_uses_camel_case() {
        let json = serde_json::to_value(sample_job()).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["customerName"], "John Doe");
        assert_eq!(json["noOfGuests"], 1);
        assert_eq!(json["status"], "NOT_STARTED");
    }

    #[test]
    fn test_missing_id_and_status_default_on_deserialize() {
        let job: CateringJob = serde_json::from_str(
            r#"{
                "customerName": "John Doe",
                "email": "johndoe@noreply.com",
                "menu": "Hot dog and fries",
                "noOfGuests": 1,
                "phoneNumber": "0790000001"
            }"#,
        )
        .unwrap();

        assert_eq!(job.id, None);
        assert_eq!(job.status, JobStatus::NotStarted);
    }

    #[test]
    fn test_patch_ignores_unknown_fields() {
        let patch: CateringJobPatch = serde_json::from_str(r#"{"foo": "bar"}"#).unwrap();
        assert!(patch.menu.is_none());
    }
}
