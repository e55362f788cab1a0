//! # fieldrep - Column-selectable text reports
//!
//! `fieldrep` renders collections of caller-defined objects as aligned,
//! sortable text tables. The caller describes what can be reported once, as a
//! catalog of fields, and each report picks its columns and sort order from
//! comma-separated name lists, the way `ps -o` or `lvs -o` do.
//!
//! ## Core Concepts
//!
//! - [`ObjectType`]: one kind of data a report row can draw from, identified
//!   by a single-bit [`ObjectTag`]. A row object may carry several kinds.
//! - [`FieldType`]: an immutable catalog entry: name, heading, description,
//!   initial width, [`DataType`] and a render function.
//! - [`Report`]: a configured report. Objects are added one at a time and
//!   written out in a single [`Report::output`] call.
//! - [`ReportOpts`]: headings, separators, quoting, buffering and layout.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldrep::{DataType, Field, FieldType, ObjectTag, ObjectType, Report, ReportOpts};
//!
//! struct Commit { id: String, author: String, lines: i64 }
//!
//! const COMMIT: ObjectTag = ObjectTag::new(1);
//!
//! fn commit(c: &Commit) -> Option<(String, String, i64)> {
//!     Some((c.id.clone(), c.author.clone(), c.lines))
//! }
//!
//! type Data = (String, String, i64);
//!
//! fn id(f: &mut Field, d: &Data) { f.report_sha(d.0.as_str()) }
//! fn author(f: &mut Field, d: &Data) { f.report_str(d.1.as_str()) }
//! fn lines(f: &mut Field, d: &Data) { f.report_num(d.2) }
//!
//! let types = vec![ObjectType::new(COMMIT, "Commits", "commit_", commit).unwrap()];
//! let fields = vec![
//!     FieldType::new(COMMIT, "id", "ID", "Commit hash", 4, DataType::Sha, id),
//!     FieldType::new(COMMIT, "author", "Author", "Commit author", 6, DataType::Str, author),
//!     FieldType::new(COMMIT, "lines", "Lines", "Lines changed", 5, DataType::Num, lines),
//! ];
//!
//! let opts = ReportOpts::default().min_sha_width(4);
//! let mut out = Vec::new();
//! let mut report = Report::new(types, fields, "id,author,lines", Some("-lines"), opts, &mut out).unwrap();
//! for (hash, who, n) in [("1a2b3c4d", "ana", 12), ("1a2b9f00", "bo", 240)] {
//!     report.report_object(&Commit { id: hash.into(), author: who.into(), lines: n }).unwrap();
//! }
//! report.output().unwrap();
//! drop(report);
//!
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text, "ID    Author Lines\n1a2b9 bo       240\n1a2b3 ana       12\n");
//! ```
//!
//! ## Selecting Fields and Sort Keys
//!
//! - Field lists are comma-separated names; empty items are skipped, and an
//!   empty list selects the whole catalog.
//! - Sort keys take an optional `+` (ascending, default) or `-` prefix. A
//!   key on a field that is not displayed is added as a hidden column.
//! - Selecting the implicit field `help` prints the catalog instead of a
//!   report.
//!
//! ## Column Widths
//!
//! With buffered output, every column grows to fit its widest value. Columns
//! of [`DataType::Sha`] instead show the shortest prefix that keeps all values
//! distinct, never less than [`ReportOpts::min_sha_width`].

pub mod error;
pub mod field;
mod help;
pub mod object;
pub mod options;
pub mod ordering;
mod output;
pub mod parse;
mod report;
pub mod resolve;
pub mod types;
pub mod util;

pub use error::{ReportError, Result};
pub use field::{
    Field, FieldProperties, FieldSource, FieldType, RenderFn, Row, SortSpec, SortValue,
    DEFAULT_WIDTH, HELP_FIELD,
};
pub use object::{ExtractFn, ObjectRegistry, ObjectType};
pub use options::{ReportOpts, DEFAULT_COLUMNS, MIN_SHA_WIDTH};
pub use ordering::{compare_rows, SortKey};
pub use report::Report;
pub use types::{Align, DataType, Dir, ObjectTag, TypeMask};
