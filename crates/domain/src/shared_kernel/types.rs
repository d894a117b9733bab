//! Core types shared across bounded contexts

use serde::{Deserialize, Serialize};

/// Unique identifier for a catering job
///
/// Assigned by the store on first save and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub i64);

impl JobId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl From<i64> for JobId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
