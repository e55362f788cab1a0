//! Display-width aware measurement, padding and truncation.
//!
//! All functions measure terminal columns rather than bytes: wide characters
//! count as two columns and ANSI escape codes count as none.

use console::{measure_text_width, pad_str, Alignment};

use crate::types::Align;

/// Returns the display width of a string, ignoring ANSI escape codes.
///
/// # Example
///
/// ```rust
/// use fieldrep::util::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Pads a string on the left (right-aligns) to reach the target width.
///
/// Longer strings are returned unchanged.
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Pads a string on the right (left-aligns) to reach the target width.
///
/// Longer strings are returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Pads or cuts a string so that it occupies exactly `width` columns.
///
/// Content wider than the column is clipped without a marker, so that a
/// shortened identifier reads as a plain prefix.
///
/// # Example
///
/// ```rust
/// use fieldrep::util::fit;
/// use fieldrep::Align;
///
/// assert_eq!(fit("42", 5, Align::Right), "   42");
/// assert_eq!(fit("0123456789abcdef", 7, Align::Left), "0123456");
/// ```
pub fn fit(s: &str, width: usize, align: Align) -> String {
    let alignment = match align {
        Align::Left => Alignment::Left,
        Align::Right => Alignment::Right,
    };
    pad_str(s, width, alignment, Some("")).into_owned()
}

/// Returns the leading `columns` display columns of `s`.
pub(crate) fn prefix(s: &str, columns: usize) -> &str {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = measure_text_width(c.encode_utf8(&mut [0; 4]));
        if used + w > columns {
            return &s[..idx];
        }
        used += w;
    }
    s
}
