//! Object types and the registry that maps tags to them.
//!
//! A report row is built from one caller object `O`. Each object type knows
//! how to pull its own kind of data `D` out of that object, so a single row
//! can combine fields drawn from several related objects.

use std::fmt;

use crate::error::{ReportError, Result};
use crate::types::ObjectTag;

/// Pulls the data for one object type out of a reported object.
///
/// Returns `None` when the object does not carry that kind of data.
pub type ExtractFn<O, D> = fn(&O) -> Option<D>;

/// One kind of object that report fields can be drawn from.
pub struct ObjectType<O, D> {
    tag: ObjectTag,
    desc: String,
    prefix: String,
    extract: ExtractFn<O, D>,
}

impl<O, D> ObjectType<O, D> {
    /// Creates an object type.
    ///
    /// The tag must be a nonzero power of two and the description must not
    /// be empty. The prefix may be empty.
    pub fn new(
        tag: ObjectTag,
        desc: impl Into<String>,
        prefix: impl Into<String>,
        extract: ExtractFn<O, D>,
    ) -> Result<Self> {
        if !tag.is_valid() {
            return Err(ReportError::InvalidObjectType {
                tag: tag.bits(),
                reason: "tag must be a nonzero power of two",
            });
        }
        let desc = desc.into();
        if desc.is_empty() {
            return Err(ReportError::InvalidObjectType {
                tag: tag.bits(),
                reason: "description cannot be empty",
            });
        }
        Ok(ObjectType {
            tag,
            desc,
            prefix: prefix.into(),
            extract,
        })
    }

    /// The type's tag.
    pub fn tag(&self) -> ObjectTag {
        self.tag
    }

    /// Human-readable description, used as the group title in field listings.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Field name prefix for this type.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Extracts this type's data from a reported object.
    pub fn extract(&self, obj: &O) -> Option<D> {
        (self.extract)(obj)
    }
}

impl<O, D> Clone for ObjectType<O, D> {
    fn clone(&self) -> Self {
        ObjectType {
            tag: self.tag,
            desc: self.desc.clone(),
            prefix: self.prefix.clone(),
            extract: self.extract,
        }
    }
}

impl<O, D> fmt::Debug for ObjectType<O, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("tag", &self.tag)
            .field("desc", &self.desc)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

fn no_data<O, D>(_: &O) -> Option<D> {
    None
}

/// The object types known to a report, plus the reserved implicit type.
pub struct ObjectRegistry<O, D> {
    implicit: Vec<ObjectType<O, D>>,
    types: Vec<ObjectType<O, D>>,
}

impl<O, D> ObjectRegistry<O, D> {
    /// Validates and registers the caller's object types.
    ///
    /// Tags must be unique and may not collide with [`ObjectTag::SPECIAL`].
    pub fn new(types: Vec<ObjectType<O, D>>) -> Result<Self> {
        for (i, t) in types.iter().enumerate() {
            if t.tag == ObjectTag::SPECIAL {
                return Err(ReportError::InvalidObjectType {
                    tag: t.tag.bits(),
                    reason: "tag is reserved for implicit fields",
                });
            }
            if types[..i].iter().any(|other| other.tag == t.tag) {
                return Err(ReportError::DuplicateObjectType(t.tag.bits()));
            }
        }

        let special = ObjectType {
            tag: ObjectTag::SPECIAL,
            desc: "Special".to_string(),
            prefix: "special_".to_string(),
            extract: no_data::<O, D>,
        };

        Ok(ObjectRegistry {
            implicit: vec![special],
            types,
        })
    }

    /// Looks up a type by tag, implicit types first.
    pub fn find(&self, tag: ObjectTag) -> Option<&ObjectType<O, D>> {
        self.implicit
            .iter()
            .chain(self.types.iter())
            .find(|t| t.tag == tag)
    }

    /// Like [`find`](Self::find) but reports a missing tag as an error.
    pub fn require(&self, tag: ObjectTag) -> Result<&ObjectType<O, D>> {
        self.find(tag)
            .ok_or(ReportError::UnknownObjectType(tag.bits()))
    }

    /// The caller-registered types, in registration order.
    pub fn types(&self) -> &[ObjectType<O, D>] {
        &self.types
    }
}

impl<O, D> fmt::Debug for ObjectRegistry<O, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRegistry")
            .field("types", &self.types)
            .finish()
    }
}
