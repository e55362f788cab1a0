//! The report: field selection, row collection and output.

use std::io::Write;

use log::{debug, warn};

use crate::error::{ReportError, Result};
use crate::field::{Field, FieldProperties, FieldSource, FieldType, Row, HELP_FIELD};
use crate::help::write_field_listing;
use crate::object::{ObjectRegistry, ObjectType};
use crate::options::ReportOpts;
use crate::ordering::{sort_rows, SortKey};
use crate::output::{write_columns_as_rows, write_headings, write_row};
use crate::parse::{FieldSelector, ParseFailure};
use crate::resolve::resolve_widths;
use crate::types::{DataType, ObjectTag, TypeMask};

fn no_report<D>(_: &mut Field, _: &D) {}

fn implicit_fields<D>() -> Vec<FieldType<D>> {
    vec![FieldType::new(
        ObjectTag::SPECIAL,
        HELP_FIELD,
        "Help",
        "Show help",
        8,
        DataType::Str,
        no_report::<D>,
    )]
}

/// A text report over objects of type `O`, written to `W`.
///
/// Each object type in the registry pulls its data `D` out of the reported
/// object; each field renders one column from that data.
///
/// The report is configured once at construction. Objects are then added
/// one at a time with [`report_object`](Self::report_object), and
/// [`output`](Self::output) sizes, sorts and writes the buffered rows.
///
/// # Example
///
/// ```rust
/// use fieldrep::{DataType, FieldType, ObjectTag, ObjectType, Report, ReportOpts};
///
/// struct Disk { name: String, size: i64 }
///
/// const DISK: ObjectTag = ObjectTag::new(1);
///
/// let types = vec![ObjectType::new(DISK, "Disks", "disk_", |d: &Disk| Some((d.name.clone(), d.size))).unwrap()];
/// let fields = vec![
///     FieldType::new(DISK, "name", "Name", "Disk name", 4, DataType::Str, |f, d: &(String, i64)| {
///         f.report_str(d.0.as_str())
///     }),
///     FieldType::new(DISK, "size", "Size", "Size in MiB", 4, DataType::Num, |f, d: &(String, i64)| {
///         f.report_num(d.1)
///     }),
/// ];
///
/// let mut out = Vec::new();
/// let mut report = Report::new(types, fields, "name,size", Some("-size"), ReportOpts::default(), &mut out).unwrap();
/// report.report_object(&Disk { name: "sda".into(), size: 512 }).unwrap();
/// report.report_object(&Disk { name: "sdb".into(), size: 2048 }).unwrap();
/// report.output().unwrap();
/// drop(report);
///
/// assert_eq!(String::from_utf8(out).unwrap(), "Name Size\nsdb  2048\nsda   512\n");
/// ```
pub struct Report<O, D, W: Write> {
    registry: ObjectRegistry<O, D>,
    implicit: Vec<FieldType<D>>,
    fields: Vec<FieldType<D>>,
    props: Vec<FieldProperties>,
    sort_keys: Vec<SortKey>,
    report_types: TypeMask,
    opts: ReportOpts,
    out: W,
    rows: Vec<Row>,
    rows_written: usize,
    header_written: bool,
    already_reported: bool,
    help: bool,
}

impl<O, D, W: Write> Report<O, D, W> {
    /// Creates a report.
    ///
    /// `output_fields` is a comma-separated list of field names in display
    /// order; an empty string selects every catalog field. `sort_keys` is a
    /// comma-separated list of field names, each optionally prefixed with
    /// `+` (ascending, the default) or `-` (descending).
    ///
    /// An unrecognised name writes the field listing to `out` before the
    /// error is returned. Selecting `help` writes the listing and puts the
    /// report in help mode, where adding objects and output do nothing.
    pub fn new(
        types: Vec<ObjectType<O, D>>,
        fields: Vec<FieldType<D>>,
        output_fields: &str,
        sort_keys: Option<&str>,
        opts: ReportOpts,
        mut out: W,
    ) -> Result<Self> {
        let registry = ObjectRegistry::new(types)?;
        let implicit = implicit_fields::<D>();

        for field in &fields {
            field.validate()?;
            if implicit.iter().any(|f| f.name() == field.name()) {
                return Err(ReportError::InvalidField {
                    name: field.name().to_string(),
                    reason: "name is reserved",
                });
            }
        }
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|other| other.name() == field.name()) {
                return Err(ReportError::InvalidField {
                    name: field.name().to_string(),
                    reason: "duplicate field name",
                });
            }
        }

        let all_fields;
        let output_fields = if output_fields.is_empty() {
            all_fields = fields
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(",");
            all_fields.as_str()
        } else {
            output_fields
        };
        let sort_keys = sort_keys.unwrap_or("");

        let listing_failure = |out: &mut W, failure: ParseFailure| -> ReportError {
            warn!("Unrecognised field: {}", failure.word);
            let listing: Vec<&FieldType<D>> = implicit.iter().chain(fields.iter()).collect();
            let written = write_field_listing(out, &registry, &listing, true)
                .and_then(|()| writeln!(out, "Unrecognised field: {}", failure.word));
            match written {
                Ok(()) => failure.error,
                Err(e) => e.into(),
            }
        };

        let mut selector = FieldSelector::new(&implicit, &fields);

        // First pass: object types only
        if let Err(failure) = selector.parse(output_fields, sort_keys, true) {
            return Err(listing_failure(&mut out, failure));
        }
        let report_types = selector.report_types();
        for tag in report_types.tags() {
            registry.require(tag)?;
        }

        // Second pass: fields and sort keys
        if let Err(failure) = selector.parse(output_fields, sort_keys, false) {
            return Err(listing_failure(&mut out, failure));
        }
        let (props, sort_keys) = selector.finish();

        debug!(
            "Report fields: {:?}, sort keys: {}, types: {:#x}",
            props.iter().map(|p| p.name()).collect::<Vec<_>>(),
            sort_keys.len(),
            report_types.bits()
        );

        let mut report = Report {
            registry,
            implicit,
            fields,
            props,
            sort_keys,
            report_types,
            opts,
            out,
            rows: Vec::new(),
            rows_written: 0,
            header_written: false,
            already_reported: false,
            help: false,
        };

        if report.help_requested() {
            report.help = true;
            report.already_reported = true;
            report.display_fields(true)?;
            writeln!(report.out)?;
        }

        Ok(report)
    }

    fn help_requested(&self) -> bool {
        self.props
            .iter()
            .any(|fp| fp.is_implicit() && fp.name() == HELP_FIELD)
    }

    fn field_type(&self, fp: &FieldProperties) -> &FieldType<D> {
        match fp.source() {
            FieldSource::Implicit(i) => &self.implicit[i],
            FieldSource::Catalog(i) => &self.fields[i],
        }
    }

    /// Writes the implicit and caller fields, grouped by object type.
    pub fn display_fields(&mut self, show_types: bool) -> Result<()> {
        let listing: Vec<&FieldType<D>> = self.implicit.iter().chain(self.fields.iter()).collect();
        write_field_listing(&mut self.out, &self.registry, &listing, show_types)?;
        Ok(())
    }

    /// Adds one object to the report.
    ///
    /// Every selected field must be able to draw data from `obj`; a missing
    /// object type or a render function that sets no value fails the whole
    /// report. In unbuffered mode the row is written immediately.
    pub fn report_object(&mut self, obj: &O) -> Result<()> {
        if self.already_reported {
            return Ok(());
        }

        let mut row = Row::with_capacity(self.props.len());
        for (index, fp) in self.props.iter().enumerate() {
            let object_type = self.registry.require(fp.tag())?;
            let data = object_type.extract(obj).ok_or_else(|| ReportError::NoData {
                field: fp.name().to_string(),
            })?;

            let mut field = Field::new(index);
            self.field_type(fp).render(&mut field, &data);
            if !field.is_set() {
                return Err(ReportError::NoValue {
                    field: fp.name().to_string(),
                });
            }
            row.push(field);
        }

        if self.opts.buffered {
            self.rows.push(row);
        } else {
            self.write_header_once()?;
            write_row(&mut self.out, &row, &self.props, &self.opts)?;
            self.rows_written += 1;
        }
        Ok(())
    }

    fn write_header_once(&mut self) -> Result<()> {
        if self.header_written {
            return Ok(());
        }
        self.header_written = true;
        if self.opts.headings {
            write_headings(&mut self.out, &self.props, &self.opts)?;
        }
        Ok(())
    }

    /// Sizes, sorts and writes the buffered rows.
    ///
    /// Returns the number of rows written. Only the first call produces
    /// output; later calls, and calls in help mode, return `Ok(0)`.
    pub fn output(&mut self) -> Result<usize> {
        if self.already_reported {
            return Ok(0);
        }
        self.already_reported = true;

        if self.opts.buffered {
            resolve_widths(&mut self.props, &self.rows, self.opts.min_sha_width);
            sort_rows(&mut self.rows, &self.sort_keys);
        }

        if self.opts.columns_as_rows && self.opts.buffered {
            write_columns_as_rows(&mut self.out, &self.props, &self.rows, &self.opts)?;
            self.rows_written += self.rows.len();
        } else {
            self.write_header_once()?;
            for row in &self.rows {
                write_row(&mut self.out, row, &self.props, &self.opts)?;
            }
            self.rows_written += self.rows.len();
        }
        self.out.flush()?;
        Ok(self.rows_written)
    }

    /// Union of the object types the selected fields and sort keys need.
    pub fn report_types(&self) -> TypeMask {
        self.report_types
    }

    /// The selected fields, hidden sort-only fields first.
    pub fn fields(&self) -> &[FieldProperties] {
        &self.props
    }

    /// Sort keys in priority order.
    pub fn sort_keys(&self) -> &[SortKey] {
        &self.sort_keys
    }

    /// The buffered rows, in their current order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// `true` when the report was created with the `help` field.
    pub fn is_help(&self) -> bool {
        self.help
    }

    pub fn opts(&self) -> &ReportOpts {
        &self.opts
    }

    /// Returns the output sink.
    pub fn into_writer(self) -> W {
        self.out
    }
}
