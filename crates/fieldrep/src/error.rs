//! Error types for report construction and output.

use thiserror::Error;

/// Errors raised while building or emitting a report.
///
/// Configuration errors (unknown names, bad catalog entries) are detected when
/// the report is constructed. Data errors are detected while rows are added.
/// Both abort the whole report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A field selection token matched no known field.
    #[error("unrecognised field: {0}")]
    UnknownField(String),

    /// A sort key token matched no known field.
    #[error("unknown sort key name: {0}")]
    UnknownSortKey(String),

    /// A sort key consisted only of a direction sign.
    #[error("sort key name cannot be empty")]
    EmptySortKey,

    /// An object type failed registration checks.
    #[error("invalid object type {tag:#x}: {reason}")]
    InvalidObjectType { tag: u32, reason: &'static str },

    /// Two object types share the same tag.
    #[error("duplicate object type tag {0:#x}")]
    DuplicateObjectType(u32),

    /// A field refers to a tag that no registered object type carries.
    #[error("unknown report object type: {0:#x}")]
    UnknownObjectType(u32),

    /// A catalog entry failed registration checks.
    #[error("invalid field '{name}': {reason}")]
    InvalidField { name: String, reason: &'static str },

    /// The reported object carries no data for the object type of a field.
    #[error("no data assigned to field {field}")]
    NoData { field: String },

    /// A render function returned without assigning a value.
    #[error("no value assigned to field {field}")]
    NoValue { field: String },

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
