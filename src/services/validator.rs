//! Constraint validation engine.
//!
//! Walks a configuration type's [`Schema`] in declaration order, reads each
//! constrained field once and checks it against its declared kinds in fixed
//! precedence: presence, then non-blank text, then non-empty collection.

use tracing::{debug, trace};

use crate::domain::error::{Expected, ValidationError, ValidationResult};
use crate::domain::models::{
    Configuration, ConstraintKind, FieldDescriptor, FieldValue, Schema,
};

/// Validates configuration objects against their declared constraints.
///
/// Stateless; every call builds or borrows the schema it needs and reads the
/// target without mutating it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Validate `config` against its type's schema and hand it back.
    ///
    /// Stops at the first violation.
    pub fn validate<C: Configuration>(config: C) -> ValidationResult<C> {
        Self::validate_with(&C::schema(), config)
    }

    /// Borrowing form of [`Validator::validate`].
    pub fn check<C: Configuration>(config: &C) -> ValidationResult<()> {
        Self::check_with(&C::schema(), config)
    }

    /// Validate `config` against an explicit schema and hand it back.
    pub fn validate_with<T>(schema: &Schema<T>, config: T) -> ValidationResult<T> {
        Self::check_with(schema, &config)?;
        Ok(config)
    }

    /// Check `config` against an explicit schema, stopping at the first
    /// violation.
    pub fn check_with<T>(schema: &Schema<T>, config: &T) -> ValidationResult<()> {
        debug!(
            owner = schema.owner(),
            fields = schema.fields().len(),
            "validating configuration"
        );
        for field in schema.constrained_fields() {
            check_field(schema.owner(), field, config)?;
        }
        Ok(())
    }

    /// Collect one violation per failing field instead of stopping at the
    /// first. An empty result means the configuration is valid.
    pub fn validate_all<C: Configuration>(config: &C) -> Vec<ValidationError> {
        Self::validate_all_with(&C::schema(), config)
    }

    /// [`Validator::validate_all`] against an explicit schema.
    pub fn validate_all_with<T>(schema: &Schema<T>, config: &T) -> Vec<ValidationError> {
        let violations: Vec<_> = schema
            .constrained_fields()
            .filter_map(|field| check_field(schema.owner(), field, config).err())
            .collect();
        debug!(
            owner = schema.owner(),
            violations = violations.len(),
            "collected violations"
        );
        violations
    }
}

fn check_field<T>(owner: &str, field: &FieldDescriptor<T>, target: &T) -> ValidationResult<()> {
    let name = field.name();
    let value = field
        .read(target)
        .map_err(|defect| ValidationError::SchemaDefect {
            field: name.to_string(),
            owner: owner.to_string(),
            defect,
        })?;

    trace!(field = name, value = %value, constraints = %field.constraints(), "checking field");

    if !value.is_present() {
        return Err(violation(ValidationError::Presence {
            field: name.to_string(),
            owner: owner.to_string(),
        }));
    }

    for kind in field.constraints().iter() {
        match kind {
            ConstraintKind::RequiredPresence => {}
            ConstraintKind::RequiredNonBlankText => match value {
                FieldValue::Text { len: 0 } => {
                    return Err(violation(ValidationError::Emptiness {
                        field: name.to_string(),
                        owner: owner.to_string(),
                        kind,
                    }));
                }
                FieldValue::Text { .. } => {}
                other => return Err(mismatch(owner, name, Expected::Text, other)),
            },
            ConstraintKind::RequiredNonEmptyCollection => match value {
                FieldValue::Collection { len: 0 } => {
                    return Err(violation(ValidationError::Emptiness {
                        field: name.to_string(),
                        owner: owner.to_string(),
                        kind,
                    }));
                }
                FieldValue::Collection { .. } => {}
                other => return Err(mismatch(owner, name, Expected::Collection, other)),
            },
        }
    }
    Ok(())
}

fn mismatch(owner: &str, field: &str, expected: Expected, found: FieldValue) -> ValidationError {
    violation(ValidationError::TypeMismatch {
        field: field.to_string(),
        owner: owner.to_string(),
        expected,
        found: found.kind_name(),
    })
}

fn violation(err: ValidationError) -> ValidationError {
    debug!(
        field = err.field(),
        owner = err.owner(),
        code = err.code(),
        "constraint violated"
    );
    err
}
