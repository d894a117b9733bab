//! Catering Jobs Server
//!
//! Bootstrap and wiring for the HTTP service

pub mod bootstrap;

pub use bootstrap::{build_components, ServerComponents, ServerConfig};
