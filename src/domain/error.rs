//! Validation errors raised by the constraint engine.

use serde::Serialize;
use thiserror::Error;

use super::models::constraint::ConstraintKind;

/// What a type-mismatch violation expected to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    /// A string.
    Text,
    /// A sequence or set.
    Collection,
}

impl Expected {
    const fn article(self) -> &'static str {
        match self {
            Self::Text => "a String",
            Self::Collection => "a collection",
        }
    }
}

/// Why a schema could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaDefect {
    /// The field carries constraints but no reader was registered.
    #[error("does not have an accessor")]
    MissingAccessor,

    /// The registered accessor returned an error.
    #[error("accessor failed: {0}")]
    AccessorFailed(String),
}

/// Whether a failure comes from the supplied data or from the schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCategory {
    /// The configuration document holds bad data.
    Data,
    /// The configuration type itself is broken.
    Schema,
}

/// A single constraint violation.
///
/// Every variant names the offending field and the simple name of the type
/// declaring it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A constrained field has no value.
    #[error("{field} in {owner} must not be undefined")]
    Presence {
        /// Field name.
        field: String,
        /// Declaring type.
        owner: String,
    },

    /// A text or collection constraint found a value of another type.
    #[error("{field} in {owner} is not {} as expected", .expected.article())]
    TypeMismatch {
        /// Field name.
        field: String,
        /// Declaring type.
        owner: String,
        /// The type the constraint requires.
        expected: Expected,
        /// The runtime type that was found.
        found: &'static str,
    },

    /// A text value is empty or a collection holds no elements.
    #[error("{field} in {owner} must not be {}", emptiness_word(.kind))]
    Emptiness {
        /// Field name.
        field: String,
        /// Declaring type.
        owner: String,
        /// The constraint that was violated.
        kind: ConstraintKind,
    },

    /// The field could not be read because the schema is malformed.
    #[error("{}", schema_defect_message(.field, .owner, .defect))]
    SchemaDefect {
        /// Field name.
        field: String,
        /// Declaring type.
        owner: String,
        /// What went wrong.
        defect: SchemaDefect,
    },
}

const fn emptiness_word(kind: &ConstraintKind) -> &'static str {
    match *kind {
        ConstraintKind::RequiredNonBlankText => "blank",
        _ => "empty",
    }
}

fn schema_defect_message(field: &str, owner: &str, defect: &SchemaDefect) -> String {
    match defect {
        SchemaDefect::MissingAccessor => {
            format!("Field '{field}' on '{owner}' does not have an accessor")
        }
        SchemaDefect::AccessorFailed(reason) => {
            format!("Error calling accessor for '{field}' on '{owner}': {reason}")
        }
    }
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::Presence { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::Emptiness { field, .. }
            | Self::SchemaDefect { field, .. } => field,
        }
    }

    /// Simple name of the type declaring the field.
    pub fn owner(&self) -> &str {
        match self {
            Self::Presence { owner, .. }
            | Self::TypeMismatch { owner, .. }
            | Self::Emptiness { owner, .. }
            | Self::SchemaDefect { owner, .. } => owner,
        }
    }

    /// Data failure or schema defect.
    pub const fn category(&self) -> ViolationCategory {
        match self {
            Self::SchemaDefect { .. } => ViolationCategory::Schema,
            _ => ViolationCategory::Data,
        }
    }

    /// Shorthand for `category() == ViolationCategory::Schema`.
    pub const fn is_schema_defect(&self) -> bool {
        matches!(self.category(), ViolationCategory::Schema)
    }

    /// Stable machine-readable code for this violation.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Presence { .. } => "presence",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::Emptiness { .. } => "emptiness",
            Self::SchemaDefect { .. } => "schema_defect",
        }
    }
}

/// Result alias for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;
