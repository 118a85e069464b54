pub mod config;
pub mod constraint;
pub mod field;
pub mod schema;

pub use config::{ServiceConfig, TlsConfig};
pub use constraint::{ConstraintKind, Constraints};
pub use field::{FieldValue, Inspect};
pub use schema::{Accessor, Configuration, FieldDescriptor, FieldSummary, Schema, SchemaBuilder};
