//! Core value types shared by the catalog, the parser and the renderer.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How a field's values are compared and aligned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Free-form text.
    #[default]
    Str,
    /// Numeric values, compared numerically and right-aligned.
    Num,
    /// Opaque fixed-alphabet identifiers, displayed as their shortest
    /// unambiguous prefix.
    Sha,
}

impl DataType {
    /// Short name used in field listings.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Str => "str",
            DataType::Num => "num",
            DataType::Sha => "sha",
        }
    }

    /// Alignment used when a field does not declare one.
    pub fn default_align(self) -> Align {
        match self {
            DataType::Num => Align::Right,
            DataType::Str | DataType::Sha => Align::Left,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    Left,
    /// Pad on the left.
    Right,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "ascending",
            Dir::Desc => "descending",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of one kind of object a report can draw fields from.
///
/// Tags are single bits so that the kinds needed by a report combine into a
/// [`TypeMask`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectTag(u32);

impl ObjectTag {
    /// Tag reserved for implicit fields such as `help`.
    pub const SPECIAL: ObjectTag = ObjectTag(0x8000_0000);

    /// Wraps a raw tag value. Validity is checked when the tag is registered.
    pub const fn new(bits: u32) -> Self {
        ObjectTag(bits)
    }

    /// The raw bit value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// A tag is valid when it is a nonzero power of two.
    pub const fn is_valid(self) -> bool {
        self.0.is_power_of_two()
    }
}

impl fmt::Display for ObjectTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Union of the object tags a report needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypeMask(u32);

impl TypeMask {
    /// The empty mask.
    pub const fn empty() -> Self {
        TypeMask(0)
    }

    /// Adds a tag to the mask.
    pub fn insert(&mut self, tag: ObjectTag) {
        self.0 |= tag.bits();
    }

    /// Returns `true` if the tag is part of the mask.
    pub fn contains(self, tag: ObjectTag) -> bool {
        self.0 & tag.bits() != 0
    }

    /// Returns `true` if no tag has been added.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The raw bit value.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// The tags in the mask, lowest bit first.
    pub fn tags(self) -> impl Iterator<Item = ObjectTag> {
        (0..u32::BITS)
            .map(|bit| ObjectTag(1 << bit))
            .filter(move |tag| self.contains(*tag))
    }
}

impl std::ops::BitOr<ObjectTag> for TypeMask {
    type Output = TypeMask;

    fn bitor(mut self, tag: ObjectTag) -> TypeMask {
        self.insert(tag);
        self
    }
}
