//! Domain layer for yamlcfg
//!
//! Constraint declarations, configuration schemas and the validation error
//! taxonomy. Nothing here performs I/O.

pub mod error;
pub mod models;

pub use error::{Expected, SchemaDefect, ValidationError, ValidationResult, ViolationCategory};
