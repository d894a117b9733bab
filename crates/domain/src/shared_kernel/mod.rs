//! Shared Kernel - Common types shared across bounded contexts
//!
//! This module contains:
//! - Error types and DomainResult
//! - Core identifier types

pub mod error;
pub mod types;

pub use error::{DomainError, DomainResult};
pub use types::JobId;
