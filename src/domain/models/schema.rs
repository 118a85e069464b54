//! Declarative schemas for configuration types.
//!
//! A configuration type describes its constrained fields once, next to the
//! struct definition, by implementing [`Configuration`]:
//!
//! ```
//! use yamlcfg::domain::models::{Configuration, Constraints, Schema};
//!
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
//! ```

use std::any::type_name;
use std::fmt;

use serde::Serialize;

use super::constraint::Constraints;
use super::field::{FieldValue, Inspect};
use crate::domain::error::SchemaDefect;

/// A configuration type with declared field constraints.
pub trait Configuration: Sized {
    /// The constraint schema for this type.
    fn schema() -> Schema<Self>;
}

type Reader<T> = Box<dyn Fn(&T) -> Result<FieldValue, String> + Send + Sync>;

/// How the validator obtains a field's value.
pub enum Accessor<T> {
    /// Borrow of a public field; cannot fail.
    Direct(Reader<T>),
    /// Call to an accessor method; may fail.
    Method(Reader<T>),
    /// Constraints were declared but nothing can read the field.
    Missing,
}

impl<T> Accessor<T> {
    /// Read the field from `target`.
    pub fn read(&self, target: &T) -> Result<FieldValue, SchemaDefect> {
        match self {
            Self::Direct(reader) | Self::Method(reader) => {
                reader(target).map_err(SchemaDefect::AccessorFailed)
            }
            Self::Missing => Err(SchemaDefect::MissingAccessor),
        }
    }

    /// Short label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Direct(_) => "field",
            Self::Method(_) => "accessor",
            Self::Missing => "missing",
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Metadata for one field of a configuration type.
#[derive(Debug)]
pub struct FieldDescriptor<T> {
    name: &'static str,
    type_name: &'static str,
    constraints: Constraints,
    accessor: Accessor<T>,
}

impl<T> FieldDescriptor<T> {
    /// Field name as it appears in the document.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared Rust type of the field.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Declared constraint kinds.
    pub const fn constraints(&self) -> Constraints {
        self.constraints
    }

    /// How the field is read.
    pub const fn accessor(&self) -> &Accessor<T> {
        &self.accessor
    }

    /// Whether the validator will read this field at all.
    pub const fn is_constrained(&self) -> bool {
        !self.constraints.is_empty()
    }

    /// Read the field's current value from `target`.
    pub fn read(&self, target: &T) -> Result<FieldValue, SchemaDefect> {
        self.accessor.read(target)
    }

    /// Serializable summary without the reader.
    pub fn summary(&self) -> FieldSummary {
        FieldSummary {
            name: self.name,
            type_name: self.type_name,
            constraints: self.constraints,
            access: self.accessor.label(),
        }
    }
}

/// Reader-free view of a [`FieldDescriptor`] for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSummary {
    /// Field name.
    pub name: &'static str,
    /// Declared Rust type.
    pub type_name: &'static str,
    /// Declared constraint kinds.
    pub constraints: Constraints,
    /// `field`, `accessor` or `missing`.
    pub access: &'static str,
}

/// The field descriptors of one configuration type, in declaration order.
#[derive(Debug)]
pub struct Schema<T> {
    owner: String,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> Schema<T> {
    /// Start a schema for `T`, named after its simple type name.
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder {
            owner: simple_type_name(type_name::<T>()),
            fields: Vec::new(),
        }
    }

    /// Simple name of the configuration type.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Field descriptors in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Fields the validator will read.
    pub fn constrained_fields(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.fields.iter().filter(|field| field.is_constrained())
    }
}

/// Declarative builder for a [`Schema`].
///
/// Registering the same field name twice merges the constraint sets; the
/// first registered reader wins.
pub struct SchemaBuilder<T> {
    owner: String,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> SchemaBuilder<T> {
    /// Override the owner name used in error messages.
    #[must_use]
    pub fn named(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Register a public field read by borrowing it.
    #[must_use]
    pub fn field<V, F>(self, name: &'static str, constraints: impl Into<Constraints>, get: F) -> Self
    where
        V: Inspect + ?Sized + 'static,
        F: Fn(&T) -> &V + Send + Sync + 'static,
    {
        let reader: Reader<T> = Box::new(move |target| Ok(get(target).inspect()));
        self.push(name, type_name::<V>(), constraints.into(), Accessor::Direct(reader))
    }

    /// Register an encapsulated field read through a fallible accessor.
    ///
    /// An `Err` from the accessor is reported as a schema defect, not as bad
    /// data.
    #[must_use]
    pub fn accessor<V, E, F>(
        self,
        name: &'static str,
        constraints: impl Into<Constraints>,
        get: F,
    ) -> Self
    where
        V: Inspect + 'static,
        E: fmt::Display,
        F: Fn(&T) -> Result<V, E> + Send + Sync + 'static,
    {
        let reader: Reader<T> = Box::new(move |target| {
            get(target)
                .map(|value| value.inspect())
                .map_err(|err| err.to_string())
        });
        self.push(name, type_name::<V>(), constraints.into(), Accessor::Method(reader))
    }

    /// Declare constraints on a field without a reader.
    ///
    /// Validation reports a schema defect for it unless a reader is
    /// registered for the same name.
    #[must_use]
    pub fn declare(self, name: &'static str, constraints: impl Into<Constraints>) -> Self {
        self.push(name, "?", constraints.into(), Accessor::Missing)
    }

    /// Finish the schema.
    pub fn build(self) -> Schema<T> {
        Schema {
            owner: self.owner,
            fields: self.fields,
        }
    }

    fn push(
        mut self,
        name: &'static str,
        type_name: &'static str,
        constraints: Constraints,
        accessor: Accessor<T>,
    ) -> Self {
        if let Some(existing) = self.fields.iter_mut().find(|field| field.name == name) {
            for kind in constraints.iter() {
                existing.constraints.insert(kind);
            }
            if matches!(existing.accessor, Accessor::Missing) {
                existing.accessor = accessor;
                existing.type_name = type_name;
            }
            return self;
        }
        self.fields.push(FieldDescriptor {
            name,
            type_name,
            constraints,
            accessor,
        });
        self
    }
}

/// Strip module paths from a `std::any::type_name` result, keeping generics.
///
/// `my_app::config::Server<alloc::string::String>` becomes `Server<String>`.
pub(crate) fn simple_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        match ch {
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' => {
                out.push_str(last_path_segment(&segment));
                segment.clear();
                out.push(ch);
            }
            _ => segment.push(ch),
        }
    }
    out.push_str(last_path_segment(&segment));
    out
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
