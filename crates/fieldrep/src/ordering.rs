//! Multi-key row ordering.
//!
//! Sort keys are plain data: which field to compare, in which direction and
//! as which datatype. A single comparator walks them in declaration order.

use std::cmp::Ordering;

use crate::field::{Row, SortValue};
use crate::types::{DataType, Dir};

/// One sort key of a report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    /// Index of the field in the report's field list.
    pub field: usize,
    pub dir: Dir,
    pub dtype: DataType,
}

/// Compares two rows using a list of sort keys.
///
/// The first key is the primary key; later keys break ties. Rows that are
/// equal on every key compare `Equal`, which keeps them in insertion order
/// under a stable sort.
pub fn compare_rows(a: &Row, b: &Row, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let va = a.get(key.field).and_then(|f| f.sort_value());
        let vb = b.get(key.field).and_then(|f| f.sort_value());
        let ordering = compare_optional(va, vb, key.dtype);
        if ordering != Ordering::Equal {
            return key.dir.apply(ordering);
        }
    }
    Ordering::Equal
}

fn compare_optional(a: Option<&SortValue>, b: Option<&SortValue>, dtype: DataType) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.compare(b, dtype),
        // Missing values sort last
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

/// Sorts rows in place. The sort is stable.
pub(crate) fn sort_rows(rows: &mut [Row], keys: &[SortKey]) {
    if keys.is_empty() {
        return;
    }
    rows.sort_by(|a, b| compare_rows(a, b, keys));
}
