//! Infrastructure layer module
//!
//! Adapters around the validation core:
//! - Configuration document loading (figment / YAML)
//! - Logging infrastructure

pub mod config;
pub mod logging;
