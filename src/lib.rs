//! yamlcfg - Typed YAML configuration with declarative field constraints
//!
//! Configuration types declare, next to their fields, which of a closed set of
//! constraints apply (presence, non-blank text, non-empty collection). Loaded
//! documents are deserialized into those types and checked field by field,
//! stopping at the first violation.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): constraint kinds, schemas and the error taxonomy
//! - **Service Layer** (`services`): the validation engine
//! - **Infrastructure Layer** (`infrastructure`): document loading and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use serde::Deserialize;
//! use yamlcfg::{load_and_validate, Configuration, Constraints, Schema};
//!
//! #[derive(Deserialize)]
//! struct ServerConfig {
//!     name: Option<String>,
//!     hosts: Option<Vec<String>>,
//!     timeout: Option<u64>,
//! }
//!
//! impl Configuration for ServerConfig {
//!     fn schema() -> Schema<Self> {
//!         Schema::builder()
//!             .field("name", Constraints::NOT_BLANK, |c: &Self| &c.name)
//!             .field("hosts", Constraints::NOT_EMPTY, |c: &Self| &c.hosts)
//!             .field("timeout", Constraints::REQUIRED, |c: &Self| &c.timeout)
//!             .build()
//!     }
//! }
//!
//! fn main() -> Result<(), yamlcfg::ConfigError> {
//!     let config: ServerConfig = load_and_validate("server.yaml")?;
//!     let hosts = config.hosts.unwrap_or_default();
//!     println!("serving {:?} on {} hosts", config.name, hosts.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    Configuration, ConstraintKind, Constraints, FieldDescriptor, FieldValue, Inspect, Schema,
    SchemaBuilder,
};
pub use domain::{Expected, SchemaDefect, ValidationError, ViolationCategory};
pub use infrastructure::config::{load_and_validate, ConfigError, ConfigLoader};
pub use services::Validator;
