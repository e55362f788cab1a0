//! Column width resolution from buffered rows.
//!
//! Ordinary columns grow to fit their widest value. Hash-typed columns are
//! sized to the shortest prefix that still tells every value apart.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::field::{FieldProperties, Row};
use crate::types::DataType;
use crate::util::{display_width, prefix};

/// Finds the shortest prefix length, starting from `min_prefix`, that keeps
/// all distinct `values` distinct.
///
/// Identical values are treated as one. If no prefix shorter than the longest
/// value is unambiguous, the longest value's width is returned. The result is
/// never below `min_prefix`.
///
/// # Example
///
/// ```rust
/// use fieldrep::resolve::find_minimum_sha_prefix;
///
/// assert_eq!(find_minimum_sha_prefix(["abc123", "abc456"], 4), 4);
/// assert_eq!(find_minimum_sha_prefix(["abcd11", "abcd12"], 4), 6);
/// ```
pub fn find_minimum_sha_prefix<'a, I>(values: I, min_prefix: usize) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    let distinct: BTreeSet<&str> = values.into_iter().collect();
    let longest = distinct.iter().map(|v| display_width(v)).max().unwrap_or(0);

    let mut len = min_prefix;
    while len < longest {
        let prefixes: HashSet<&str> = distinct.iter().map(|v| prefix(v, len)).collect();
        if prefixes.len() == distinct.len() {
            return len;
        }
        len += 1;
    }
    len
}

/// Resolves the display width of every field from the buffered rows.
///
/// Widths only grow. Stored values are never modified.
pub(crate) fn resolve_widths(props: &mut [FieldProperties], rows: &[Row], min_sha_width: usize) {
    for (index, fp) in props.iter_mut().enumerate() {
        let values = rows
            .iter()
            .filter_map(|row| row.get(index))
            .map(|field| field.report_string());

        if fp.dtype == DataType::Sha {
            if rows.is_empty() {
                continue;
            }
            let min_prefix = min_sha_width.max(fp.width);
            fp.width = find_minimum_sha_prefix(values, min_prefix);
        } else {
            let widest = values.map(display_width).max().unwrap_or(0);
            fp.width = fp.width.max(widest);
        }
        debug!("Resolved width of {}: {}", fp.name, fp.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Field, FieldSource, FieldType};
    use crate::types::ObjectTag;

    fn nothing(_: &mut Field, _: &()) {}

    fn props(dtype: DataType, width: usize) -> FieldProperties {
        let ft = FieldType::new(ObjectTag::new(1), "f", "F", "", width, dtype, nothing);
        FieldProperties::from_type(&ft, FieldSource::Catalog(0), false)
    }

    fn row(value: &str) -> Row {
        let mut field = Field::new(0);
        field.report_str(value);
        std::iter::once(field).collect()
    }

    #[test]
    fn prefix_already_unique() {
        assert_eq!(find_minimum_sha_prefix(["abc123", "abc456"], 4), 4);
    }

    #[test]
    fn prefix_grows_until_unique() {
        assert_eq!(find_minimum_sha_prefix(["abcd11", "abcd12"], 4), 6);
        assert_eq!(find_minimum_sha_prefix(["abcd1x", "abcd2x"], 4), 5);
    }

    #[test]
    fn identical_values_do_not_force_full_width() {
        assert_eq!(find_minimum_sha_prefix(["abcdef", "abcdef"], 2), 2);
    }

    #[test]
    fn minimum_above_longest_is_kept() {
        assert_eq!(find_minimum_sha_prefix(["ab", "ac"], 7), 7);
        assert_eq!(find_minimum_sha_prefix(std::iter::empty(), 3), 3);
    }

    #[test]
    fn string_columns_grow_to_widest() {
        let mut fps = vec![props(DataType::Str, 3)];
        resolve_widths(&mut fps, &[row("ab"), row("abcdef")], 7);
        assert_eq!(fps[0].width(), 6);
    }

    #[test]
    fn string_columns_never_shrink() {
        let mut fps = vec![props(DataType::Str, 10)];
        resolve_widths(&mut fps, &[row("ab")], 7);
        assert_eq!(fps[0].width(), 10);
    }

    #[test]
    fn sha_columns_use_unique_prefix() {
        let mut fps = vec![props(DataType::Sha, 4)];
        resolve_widths(&mut fps, &[row("abcd11"), row("abcd12")], 4);
        assert_eq!(fps[0].width(), 6);

        let mut fps = vec![props(DataType::Sha, 4)];
        let long_a = "0123456789abcdef0123";
        let long_b = "0123456789abcdef9999";
        resolve_widths(&mut fps, &[row(long_a), row(long_b)], 7);
        assert_eq!(fps[0].width(), 17);
    }

    #[test]
    fn sha_width_untouched_without_rows() {
        let mut fps = vec![props(DataType::Sha, 7)];
        resolve_widths(&mut fps, &[], 7);
        assert_eq!(fps[0].width(), 7);
    }
}
