//! Field catalog listing, shown for `help` and for unrecognised names.

use std::io::{self, Write};

use crate::field::FieldType;
use crate::object::ObjectRegistry;

const BANNER_MAX: usize = 79;

fn longest_name_len<O, D>(registry: &ObjectRegistry<O, D>, fields: &[&FieldType<D>]) -> usize {
    let by_field = fields.iter().map(|f| f.name().len());
    // Room for "<prefix>all" style names
    let by_type = registry.types().iter().map(|t| t.prefix().len() + 3);
    by_field.chain(by_type).max().unwrap_or(0)
}

/// Writes the fields grouped by object type description.
///
/// Each group starts with a `"<desc> Fields"` banner and a dashed rule.
/// Fields are listed as `name - description`, followed by the datatype in
/// brackets when `show_types` is set.
pub(crate) fn write_field_listing<O, D, W: Write>(
    out: &mut W,
    registry: &ObjectRegistry<O, D>,
    fields: &[&FieldType<D>],
    show_types: bool,
) -> io::Result<()> {
    let name_len = longest_name_len(registry, fields);
    let mut last_desc = "";

    for field in fields {
        let desc = registry.find(field.tag()).map(|t| t.desc()).unwrap_or("");
        if desc != last_desc {
            if !last_desc.is_empty() {
                writeln!(out, " ")?;
            }
            writeln!(out, "{} Fields", desc)?;
            writeln!(out, "{}", "-".repeat((desc.len() + 7).min(BANNER_MAX)))?;
        }
        if show_types {
            writeln!(
                out,
                "  {:<width$} - {} [{}]",
                field.name(),
                field.desc(),
                field.dtype(),
                width = name_len
            )?;
        } else {
            writeln!(out, "  {:<width$} - {}", field.name(), field.desc(), width = name_len)?;
        }
        last_desc = desc;
    }
    Ok(())
}
