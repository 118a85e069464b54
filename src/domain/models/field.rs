//! Runtime view of a configuration field's value.
//!
//! The validator never needs the value itself, only its shape: whether it is
//! absent, whether it is text or a collection, and how long it is. Field
//! readers therefore produce a [`FieldValue`] through the [`Inspect`] trait
//! instead of handing out references into the configuration object.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};

/// Shape of a field value as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue {
    /// No value (`None`, YAML `null`).
    Absent,
    /// A string of `len` bytes.
    Text {
        /// Length in bytes.
        len: usize,
    },
    /// A sequence or set of `len` elements.
    Collection {
        /// Number of elements.
        len: usize,
    },
    /// A key/value map of `len` entries. Maps are not collections.
    Mapping {
        /// Number of entries.
        len: usize,
    },
    /// A boolean.
    Bool,
    /// An integer or floating point number.
    Number,
    /// Any other present value, named by its kind (e.g. a nested object).
    Other(&'static str),
}

impl FieldValue {
    /// Whether a value is present at all.
    pub const fn is_present(self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Human-readable name of the runtime type.
    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::Absent => "undefined",
            Self::Text { .. } => "text",
            Self::Collection { .. } => "collection",
            Self::Mapping { .. } => "mapping",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Other(kind) => kind,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind_name())
    }
}

/// Types whose runtime shape the validator can inspect.
///
/// Implemented for the common configuration field types. Nested configuration
/// structs can implement it as `FieldValue::Other("object")`; their own
/// constraints are checked only when they are validated separately.
pub trait Inspect {
    /// Describe the current value.
    fn inspect(&self) -> FieldValue;
}

impl<T: Inspect + ?Sized> Inspect for &T {
    fn inspect(&self) -> FieldValue {
        (**self).inspect()
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn inspect(&self) -> FieldValue {
        (**self).inspect()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn inspect(&self) -> FieldValue {
        self.as_ref().map_or(FieldValue::Absent, Inspect::inspect)
    }
}

impl Inspect for str {
    fn inspect(&self) -> FieldValue {
        FieldValue::Text { len: self.len() }
    }
}

impl Inspect for String {
    fn inspect(&self) -> FieldValue {
        FieldValue::Text { len: self.len() }
    }
}

impl Inspect for bool {
    fn inspect(&self) -> FieldValue {
        FieldValue::Bool
    }
}

macro_rules! impl_inspect_number {
    ($($ty:ty),*) => {
        $(
            impl Inspect for $ty {
                fn inspect(&self) -> FieldValue {
                    FieldValue::Number
                }
            }
        )*
    };
}

impl_inspect_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Inspect for Path {
    fn inspect(&self) -> FieldValue {
        FieldValue::Other("path")
    }
}

impl Inspect for PathBuf {
    fn inspect(&self) -> FieldValue {
        FieldValue::Other("path")
    }
}

impl<T> Inspect for [T] {
    fn inspect(&self) -> FieldValue {
        FieldValue::Collection { len: self.len() }
    }
}

macro_rules! impl_inspect_collection {
    ($($ty:ident<$($param:ident),+>),*) => {
        $(
            impl<$($param),+> Inspect for $ty<$($param),+> {
                fn inspect(&self) -> FieldValue {
                    FieldValue::Collection { len: self.len() }
                }
            }
        )*
    };
}

impl_inspect_collection!(Vec<T>, VecDeque<T>, LinkedList<T>, BTreeSet<T>, HashSet<T, S>);

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn inspect(&self) -> FieldValue {
        FieldValue::Mapping { len: self.len() }
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn inspect(&self) -> FieldValue {
        FieldValue::Mapping { len: self.len() }
    }
}

impl Inspect for serde_yaml::Value {
    fn inspect(&self) -> FieldValue {
        use serde_yaml::Value;

        match self {
            Value::Null => FieldValue::Absent,
            Value::Bool(_) => FieldValue::Bool,
            Value::Number(_) => FieldValue::Number,
            Value::String(text) => text.inspect(),
            Value::Sequence(items) => items.inspect(),
            Value::Mapping(map) => FieldValue::Mapping { len: map.len() },
            Value::Tagged(tagged) => tagged.value.inspect(),
        }
    }
}

impl Inspect for serde_json::Value {
    fn inspect(&self) -> FieldValue {
        use serde_json::Value;

        match self {
            Value::Null => FieldValue::Absent,
            Value::Bool(_) => FieldValue::Bool,
            Value::Number(_) => FieldValue::Number,
            Value::String(text) => text.inspect(),
            Value::Array(items) => items.inspect(),
            Value::Object(map) => FieldValue::Mapping { len: map.len() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_maps_none_to_absent() {
        let missing: Option<String> = None;
        assert_eq!(Inspect::inspect(&missing), FieldValue::Absent);
        assert_eq!(Inspect::inspect(&Some(String::from("x"))), FieldValue::Text { len: 1 });
    }

    #[test]
    fn test_empty_string_is_present() {
        let value = String::new().inspect();
        assert!(value.is_present());
        assert_eq!(value, FieldValue::Text { len: 0 });
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!("   ".inspect(), FieldValue::Text { len: 3 });
    }

    #[test]
    fn test_collections() {
        assert_eq!(Vec::<u8>::new().inspect(), FieldValue::Collection { len: 0 });
        let set: HashSet<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(set.inspect(), FieldValue::Collection { len: 2 });
        let map: BTreeMap<&str, u8> = BTreeMap::new();
        assert_eq!(map.inspect(), FieldValue::Mapping { len: 0 });
    }

    #[test]
    fn test_yaml_values() {
        let doc: serde_yaml::Value =
            serde_yaml::from_str("a: ~\nb: ''\nc: [1, 2]\nd: {x: 1}\ne: 3\nf: true").unwrap();
        assert_eq!(doc["a"].inspect(), FieldValue::Absent);
        assert_eq!(doc["b"].inspect(), FieldValue::Text { len: 0 });
        assert_eq!(doc["c"].inspect(), FieldValue::Collection { len: 2 });
        assert_eq!(doc["d"].inspect(), FieldValue::Mapping { len: 1 });
        assert_eq!(doc["e"].inspect(), FieldValue::Number);
        assert_eq!(doc["f"].inspect(), FieldValue::Bool);
    }

    #[test]
    fn test_json_values() {
        let doc = serde_json::json!({ "hosts": [], "name": "svc" });
        assert_eq!(doc["hosts"].inspect(), FieldValue::Collection { len: 0 });
        assert_eq!(doc["name"].inspect(), FieldValue::Text { len: 3 });
        assert_eq!(doc["missing"].inspect(), FieldValue::Absent);
    }
}
