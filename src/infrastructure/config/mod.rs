//! Configuration loading infrastructure
//!
//! Document loading using figment:
//! - YAML file, reader or string input
//! - Optional environment variable overrides
//! - Constraint validation of the typed result

pub mod loader;

pub use loader::{load_and_validate, ConfigError, ConfigLoader, INLINE_SOURCE};
