//! Output options for a report.

use serde::{Deserialize, Serialize};

/// Line width assumed when the caller does not know the terminal size.
pub const DEFAULT_COLUMNS: usize = 80;

/// Shortest prefix shown for hash-typed fields.
pub const MIN_SHA_WIDTH: usize = 7;

/// Options controlling the formatting and output of a report.
///
/// All fields have defaults, so a partial configuration document
/// deserializes into a complete set of options.
///
/// # Example
///
/// ```rust
/// use fieldrep::ReportOpts;
///
/// let opts = ReportOpts::default().separator(",").headings(false);
/// assert_eq!(opts.separator, ",");
/// assert!(opts.buffered);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOpts {
    /// Target line width. Recorded for callers; layout does not depend on it.
    pub columns: usize,
    /// Print a heading line before the first row.
    pub headings: bool,
    /// Collect all rows before output so they can be sized and sorted.
    pub buffered: bool,
    /// Text placed between columns.
    pub separator: String,
    /// When non-empty, each value is written as `PREFIXNAME=value`.
    pub field_name_prefix: String,
    /// Leave values unquoted. When `false` each value is wrapped in `'`.
    pub unquoted: bool,
    /// Pad and clip values to their column width.
    pub aligned: bool,
    /// Transpose the report: one line per field instead of per row.
    pub columns_as_rows: bool,
    /// Lower bound for the displayed width of hash-typed fields.
    pub min_sha_width: usize,
}

impl Default for ReportOpts {
    fn default() -> Self {
        ReportOpts {
            columns: DEFAULT_COLUMNS,
            headings: true,
            buffered: true,
            separator: " ".to_string(),
            field_name_prefix: String::new(),
            unquoted: true,
            aligned: true,
            columns_as_rows: false,
            min_sha_width: MIN_SHA_WIDTH,
        }
    }
}

impl ReportOpts {
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    pub fn headings(mut self, headings: bool) -> Self {
        self.headings = headings;
        self
    }

    pub fn buffered(mut self, buffered: bool) -> Self {
        self.buffered = buffered;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn field_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.field_name_prefix = prefix.into();
        self
    }

    pub fn unquoted(mut self, unquoted: bool) -> Self {
        self.unquoted = unquoted;
        self
    }

    pub fn aligned(mut self, aligned: bool) -> Self {
        self.aligned = aligned;
        self
    }

    pub fn columns_as_rows(mut self, columns_as_rows: bool) -> Self {
        self.columns_as_rows = columns_as_rows;
        self
    }

    pub fn min_sha_width(mut self, width: usize) -> Self {
        self.min_sha_width = width;
        self
    }
}
