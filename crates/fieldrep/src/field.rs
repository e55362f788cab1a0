//! Field descriptors, per-report field state and rendered values.
//!
//! A [`FieldType`] is an immutable catalog entry shared by every report that
//! uses the catalog. When a report selects a field it copies the descriptor
//! into a [`FieldProperties`], which carries the state that changes while the
//! report runs (width, sort settings, visibility).

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::error::{ReportError, Result};
use crate::types::{Align, DataType, Dir, ObjectTag};

/// Width used for fields declared with a width of zero.
pub const DEFAULT_WIDTH: usize = 8;

/// Name of the implicit field that switches a report into help mode.
pub const HELP_FIELD: &str = "help";

/// Fills in a [`Field`] from one object's data.
///
/// The function must call one of the `report_*` setters on the field. A field
/// left unset fails the row with [`ReportError::NoValue`].
pub type RenderFn<D> = fn(&mut Field, &D);

/// A catalog entry describing one reportable column.
pub struct FieldType<D> {
    tag: ObjectTag,
    name: String,
    heading: String,
    desc: String,
    width: usize,
    dtype: DataType,
    align: Align,
    render: RenderFn<D>,
}

impl<D> FieldType<D> {
    /// Creates a field descriptor.
    ///
    /// A `width` of zero selects [`DEFAULT_WIDTH`]. Alignment defaults to the
    /// datatype's natural alignment and can be overridden with
    /// [`align`](Self::align).
    pub fn new(
        tag: ObjectTag,
        name: impl Into<String>,
        heading: impl Into<String>,
        desc: impl Into<String>,
        width: usize,
        dtype: DataType,
        render: RenderFn<D>,
    ) -> Self {
        FieldType {
            tag,
            name: name.into(),
            heading: heading.into(),
            desc: desc.into(),
            width: if width == 0 { DEFAULT_WIDTH } else { width },
            dtype,
            align: dtype.default_align(),
            render,
        }
    }

    /// Overrides the field's alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn tag(&self) -> ObjectTag {
        self.tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    pub fn alignment(&self) -> Align {
        self.align
    }

    /// Runs the render function against one object's data.
    pub fn render(&self, field: &mut Field, data: &D) {
        (self.render)(field, data)
    }

    /// Checks the descriptor when it is registered with a report.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(ReportError::InvalidField {
                name: self.name.clone(),
                reason: "name is required",
            });
        }
        if self.tag.bits() == 0 {
            return Err(ReportError::InvalidField {
                name: self.name.clone(),
                reason: "object type must be non-zero",
            });
        }
        Ok(())
    }
}

impl<D> Clone for FieldType<D> {
    fn clone(&self) -> Self {
        FieldType {
            tag: self.tag,
            name: self.name.clone(),
            heading: self.heading.clone(),
            desc: self.desc.clone(),
            width: self.width,
            dtype: self.dtype,
            align: self.align,
            render: self.render,
        }
    }
}

impl<D> fmt::Debug for FieldType<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldType")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .field("heading", &self.heading)
            .field("width", &self.width)
            .field("dtype", &self.dtype)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

/// Where a selected field's descriptor lives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldSource {
    /// Index into the implicit catalog.
    Implicit(usize),
    /// Index into the caller's catalog.
    Catalog(usize),
}

/// Sort settings of a field used as a sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub dir: Dir,
    /// Declaration order among the report's sort keys.
    pub position: usize,
}

/// A field as instantiated in one report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldProperties {
    pub(crate) source: FieldSource,
    pub(crate) name: String,
    pub(crate) heading: String,
    pub(crate) tag: ObjectTag,
    pub(crate) dtype: DataType,
    pub(crate) align: Align,
    pub(crate) initial_width: usize,
    pub(crate) width: usize,
    pub(crate) hidden: bool,
    pub(crate) sort: Option<SortSpec>,
}

impl FieldProperties {
    pub(crate) fn from_type<D>(field: &FieldType<D>, source: FieldSource, hidden: bool) -> Self {
        FieldProperties {
            source,
            name: field.name.clone(),
            heading: field.heading.clone(),
            tag: field.tag,
            dtype: field.dtype,
            align: field.align,
            initial_width: field.width,
            width: field.width,
            hidden,
            sort: None,
        }
    }

    pub fn source(&self) -> FieldSource {
        self.source
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn tag(&self) -> ObjectTag {
        self.tag
    }

    pub fn dtype(&self) -> DataType {
        self.dtype
    }

    pub fn align(&self) -> Align {
        self.align
    }

    /// Width the field started with.
    pub fn initial_width(&self) -> usize {
        self.initial_width
    }

    /// Current display width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Hidden fields take part in sorting but are not displayed.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// `true` for fields from the implicit catalog.
    pub fn is_implicit(&self) -> bool {
        matches!(self.source, FieldSource::Implicit(_))
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn is_sort_key(&self) -> bool {
        self.sort.is_some()
    }
}

/// Raw value of a field, used for sorting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortValue {
    Num(i64),
    Str(String),
}

impl SortValue {
    /// The value as text, for string comparison.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            SortValue::Num(n) => Cow::Owned(n.to_string()),
            SortValue::Str(s) => Cow::Borrowed(s),
        }
    }

    /// Compares two values according to the field's datatype.
    ///
    /// Numeric fields compare numerically when both sides hold numbers; every
    /// other combination compares as text.
    pub fn compare(&self, other: &SortValue, dtype: DataType) -> Ordering {
        match (dtype, self, other) {
            (DataType::Num, SortValue::Num(a), SortValue::Num(b)) => a.cmp(b),
            _ => self.as_text().cmp(&other.as_text()),
        }
    }
}

/// One column value of one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    props: usize,
    report_string: Option<String>,
    sort_value: Option<SortValue>,
}

impl Field {
    pub(crate) fn new(props: usize) -> Self {
        Field {
            props,
            report_string: None,
            sort_value: None,
        }
    }

    /// Reports a string value; it is displayed and sorted as-is.
    pub fn report_str(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.set_value(value.clone(), SortValue::Str(value));
    }

    /// Reports a hash-like identifier.
    pub fn report_sha(&mut self, value: impl Into<String>) {
        self.report_str(value);
    }

    /// Reports a number; it is displayed in decimal and sorted numerically.
    pub fn report_num(&mut self, value: i64) {
        self.set_value(value.to_string(), SortValue::Num(value));
    }

    /// Sets display text and sort value independently.
    pub fn set_value(&mut self, report_string: impl Into<String>, sort_value: SortValue) {
        self.report_string = Some(report_string.into());
        self.sort_value = Some(sort_value);
    }

    /// Index of this field's properties in the report's field list.
    pub fn props_index(&self) -> usize {
        self.props
    }

    /// The rendered text, empty until a value has been reported.
    pub fn report_string(&self) -> &str {
        self.report_string.as_deref().unwrap_or("")
    }

    pub fn sort_value(&self) -> Option<&SortValue> {
        self.sort_value.as_ref()
    }

    pub(crate) fn is_set(&self) -> bool {
        self.report_string.is_some()
    }
}

/// The fields of one reported object, in field list order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<Field>,
}

impl Row {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Row {
            fields: Vec::with_capacity(n),
        }
    }

    pub(crate) fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }
}

impl FromIterator<Field> for Row {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Row {
            fields: iter.into_iter().collect(),
        }
    }
}
