//! Text rendering of headings and rows.

use std::io::{self, Write};

use crate::field::{Field, FieldProperties, Row};
use crate::options::ReportOpts;
use crate::types::Align;
use crate::util::{display_width, fit};

const STANDARD_QUOTE: char = '\'';
const STANDARD_PAIR: char = '=';

/// Formats the heading line. Hidden fields are skipped.
pub(crate) fn format_headings(props: &[FieldProperties], opts: &ReportOpts) -> String {
    props
        .iter()
        .filter(|fp| !fp.hidden)
        .map(|fp| {
            if opts.aligned {
                fit(&fp.heading, fp.width, Align::Left)
            } else {
                fp.heading.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(&opts.separator)
}

/// Formats one field value, applying name prefix, alignment and quoting.
pub(crate) fn format_field(field: &Field, fp: &FieldProperties, opts: &ReportOpts) -> String {
    let mut out = String::new();
    if !opts.field_name_prefix.is_empty() {
        out.push_str(&opts.field_name_prefix);
        out.push_str(&fp.name.to_uppercase());
        out.push(STANDARD_PAIR);
    }

    let value = field.report_string();
    let value = if opts.aligned {
        fit(value, fp.width, fp.align)
    } else {
        value.to_string()
    };

    if opts.unquoted {
        out.push_str(&value);
    } else {
        out.push(STANDARD_QUOTE);
        out.push_str(&value);
        out.push(STANDARD_QUOTE);
    }
    out
}

/// Formats a row's visible fields, joined by the separator.
pub(crate) fn format_row(row: &Row, props: &[FieldProperties], opts: &ReportOpts) -> String {
    row.fields()
        .iter()
        .zip(props)
        .filter(|(_, fp)| !fp.hidden)
        .map(|(field, fp)| format_field(field, fp, opts))
        .collect::<Vec<_>>()
        .join(&opts.separator)
}

pub(crate) fn write_headings<W: Write>(
    out: &mut W,
    props: &[FieldProperties],
    opts: &ReportOpts,
) -> io::Result<()> {
    writeln!(out, "{}", format_headings(props, opts))
}

pub(crate) fn write_row<W: Write>(
    out: &mut W,
    row: &Row,
    props: &[FieldProperties],
    opts: &ReportOpts,
) -> io::Result<()> {
    writeln!(out, "{}", format_row(row, props, opts))
}

/// Writes the transposed layout: one line per visible field holding the
/// heading (when enabled) followed by that field's value in every row.
pub(crate) fn write_columns_as_rows<W: Write>(
    out: &mut W,
    props: &[FieldProperties],
    rows: &[Row],
    opts: &ReportOpts,
) -> io::Result<()> {
    let heading_width = props
        .iter()
        .filter(|fp| !fp.hidden)
        .map(|fp| display_width(&fp.heading))
        .max()
        .unwrap_or(0);

    for (index, fp) in props.iter().enumerate() {
        if fp.hidden {
            continue;
        }
        let mut cells = Vec::with_capacity(rows.len() + 1);
        if opts.headings {
            cells.push(if opts.aligned {
                fit(&fp.heading, heading_width, Align::Left)
            } else {
                fp.heading.clone()
            });
        }
        for row in rows {
            if let Some(field) = row.get(index) {
                cells.push(format_field(field, fp, opts));
            }
        }
        writeln!(out, "{}", cells.join(&opts.separator))?;
    }
    Ok(())
}
