//! Constraint declarations attachable to configuration fields.

use std::fmt;

use serde::Serialize;

/// A single per-field constraint kind.
///
/// Variants are ordered by evaluation precedence: presence is always checked
/// first, then text, then collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintKind {
    /// Value must not be absent.
    RequiredPresence,
    /// Value must be present, must be text, and must not be the empty string.
    RequiredNonBlankText,
    /// Value must be present, must be a sequence or set, and must hold at
    /// least one element.
    RequiredNonEmptyCollection,
}

impl ConstraintKind {
    /// All kinds in evaluation order.
    pub const ALL: [Self; 3] = [
        Self::RequiredPresence,
        Self::RequiredNonBlankText,
        Self::RequiredNonEmptyCollection,
    ];

    const fn bit(self) -> u8 {
        match self {
            Self::RequiredPresence => 0b001,
            Self::RequiredNonBlankText => 0b010,
            Self::RequiredNonEmptyCollection => 0b100,
        }
    }

    /// Short name used in human-readable output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequiredPresence => "required",
            Self::RequiredNonBlankText => "not_blank",
            Self::RequiredNonEmptyCollection => "not_empty",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of constraint kinds declared on one field.
///
/// Inserting a kind twice is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraints(u8);

impl Constraints {
    /// No constraints; a field declared with this set is never read.
    pub const NONE: Self = Self(0);
    /// `RequiredPresence` only.
    pub const REQUIRED: Self = Self(ConstraintKind::RequiredPresence.bit());
    /// `RequiredNonBlankText`.
    pub const NOT_BLANK: Self = Self(ConstraintKind::RequiredNonBlankText.bit());
    /// `RequiredNonEmptyCollection`.
    pub const NOT_EMPTY: Self = Self(ConstraintKind::RequiredNonEmptyCollection.bit());

    /// Returns a copy of this set with `kind` added.
    #[must_use]
    pub const fn with(self, kind: ConstraintKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// Adds `kind` to the set.
    pub fn insert(&mut self, kind: ConstraintKind) {
        self.0 |= kind.bit();
    }

    /// Whether `kind` was declared explicitly.
    pub const fn contains(self, kind: ConstraintKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Whether no kind was declared.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether presence is required, either declared or implied by a
    /// stronger kind.
    pub const fn requires_presence(self) -> bool {
        !self.is_empty()
    }

    /// Declared kinds in evaluation order.
    pub fn iter(self) -> impl Iterator<Item = ConstraintKind> {
        ConstraintKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl From<ConstraintKind> for Constraints {
    fn from(kind: ConstraintKind) -> Self {
        Self(kind.bit())
    }
}

impl<const N: usize> From<[ConstraintKind; N]> for Constraints {
    fn from(kinds: [ConstraintKind; N]) -> Self {
        kinds.into_iter().collect()
    }
}

impl From<&[ConstraintKind]> for Constraints {
    fn from(kinds: &[ConstraintKind]) -> Self {
        kinds.iter().copied().collect()
    }
}

impl FromIterator<ConstraintKind> for Constraints {
    fn from_iter<I: IntoIterator<Item = ConstraintKind>>(iter: I) -> Self {
        let mut set = Self::NONE;
        for kind in iter {
            set.insert(kind);
        }
        set
    }
}

impl fmt::Display for Constraints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let names: Vec<&str> = self.iter().map(ConstraintKind::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

impl Serialize for Constraints {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
