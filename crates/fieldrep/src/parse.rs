//! Field selection and sort key parsing.
//!
//! Both lists are walked twice. The first walk only collects the object
//! types the report needs, so type-dependent checks can run before any field
//! is instantiated. The second walk builds the field list and sort keys.

use log::{debug, info};

use crate::error::ReportError;
use crate::field::{FieldProperties, FieldSource, FieldType, SortSpec};
use crate::ordering::SortKey;
use crate::types::{Dir, TypeMask};

/// Splits a comma-separated list, skipping empty items.
pub fn tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').filter(|word| !word.is_empty())
}

/// Splits an optional direction sign off a sort key.
///
/// A leading `+` or no sign means ascending, `-` means descending.
///
/// # Example
///
/// ```rust
/// use fieldrep::parse::parse_sort_key;
/// use fieldrep::Dir;
///
/// assert_eq!(parse_sort_key("-bootid").unwrap(), (Dir::Desc, "bootid"));
/// assert_eq!(parse_sort_key("title").unwrap(), (Dir::Asc, "title"));
/// assert!(parse_sort_key("+").is_err());
/// ```
pub fn parse_sort_key(word: &str) -> Result<(Dir, &str), ReportError> {
    let (dir, name) = if let Some(rest) = word.strip_prefix('+') {
        (Dir::Asc, rest)
    } else if let Some(rest) = word.strip_prefix('-') {
        (Dir::Desc, rest)
    } else {
        (Dir::Asc, word)
    };
    if name.is_empty() {
        return Err(ReportError::EmptySortKey);
    }
    Ok((dir, name))
}

/// A parse failure together with the list item that caused it.
#[derive(Debug)]
pub(crate) struct ParseFailure {
    pub word: String,
    pub error: ReportError,
}

impl ParseFailure {
    fn new(word: &str, error: ReportError) -> Self {
        ParseFailure {
            word: word.to_string(),
            error,
        }
    }
}

/// Resolves selection and sort lists against the implicit and caller catalogs.
pub(crate) struct FieldSelector<'c, D> {
    implicit: &'c [FieldType<D>],
    fields: &'c [FieldType<D>],
    report_types: TypeMask,
    props: Vec<FieldProperties>,
    keys_count: usize,
}

impl<'c, D> FieldSelector<'c, D> {
    pub fn new(implicit: &'c [FieldType<D>], fields: &'c [FieldType<D>]) -> Self {
        FieldSelector {
            implicit,
            fields,
            report_types: TypeMask::empty(),
            props: Vec::new(),
            keys_count: 0,
        }
    }

    /// Union of the object types seen so far.
    pub fn report_types(&self) -> TypeMask {
        self.report_types
    }

    fn lookup(&self, name: &str) -> Option<FieldSource> {
        if let Some(i) = self.implicit.iter().position(|f| f.name() == name) {
            return Some(FieldSource::Implicit(i));
        }
        self.fields
            .iter()
            .position(|f| f.name() == name)
            .map(FieldSource::Catalog)
    }

    fn field_type(&self, source: FieldSource) -> &'c FieldType<D> {
        match source {
            FieldSource::Implicit(i) => &self.implicit[i],
            FieldSource::Catalog(i) => &self.fields[i],
        }
    }

    fn find_props(&self, source: FieldSource) -> Option<usize> {
        self.props.iter().position(|p| p.source == source)
    }

    /// Instantiates a field. Hidden fields go to the front of the list.
    fn add_field(&mut self, source: FieldSource, hidden: bool) -> usize {
        let props = FieldProperties::from_type(self.field_type(source), source, hidden);
        debug!("Adding field {} (hidden: {})", props.name, hidden);
        if hidden {
            self.props.insert(0, props);
            0
        } else {
            self.props.push(props);
            self.props.len() - 1
        }
    }

    /// Runs one pass over the field list and then the sort key list.
    pub fn parse(&mut self, fields: &str, keys: &str, types_only: bool) -> Result<(), ParseFailure> {
        self.parse_fields(fields, types_only)?;
        self.parse_keys(keys, types_only)
    }

    /// Parses the output field list.
    pub fn parse_fields(&mut self, list: &str, types_only: bool) -> Result<(), ParseFailure> {
        for word in tokens(list) {
            let source = self
                .lookup(word)
                .ok_or_else(|| ParseFailure::new(word, ReportError::UnknownField(word.into())))?;
            if types_only {
                let tag = self.field_type(source).tag();
                self.report_types.insert(tag);
                continue;
            }
            if self.find_props(source).is_some() {
                debug!("Ignoring duplicate field: {}", word);
                continue;
            }
            self.add_field(source, false);
        }
        Ok(())
    }

    /// Parses the sort key list.
    ///
    /// Keys on fields that are not displayed add the field as a hidden column.
    pub fn parse_keys(&mut self, list: &str, types_only: bool) -> Result<(), ParseFailure> {
        for word in tokens(list) {
            let (dir, name) = parse_sort_key(word).map_err(|e| ParseFailure::new(word, e))?;
            let source = self.lookup(name).ok_or_else(|| {
                ParseFailure::new(word, ReportError::UnknownSortKey(name.into()))
            })?;
            self.add_sort_key(source, dir, types_only);
        }
        Ok(())
    }

    fn add_sort_key(&mut self, source: FieldSource, dir: Dir, types_only: bool) {
        let index = match self.find_props(source) {
            Some(index) => index,
            None if types_only => {
                let tag = self.field_type(source).tag();
                self.report_types.insert(tag);
                return;
            }
            None => self.add_field(source, true),
        };

        let props = &mut self.props[index];
        if props.sort.is_some() {
            info!("Ignoring duplicate sort field: {}", props.name);
            return;
        }
        debug!("Adding sort key {} ({})", props.name, dir);
        props.sort = Some(SortSpec {
            dir,
            position: self.keys_count,
        });
        self.keys_count += 1;
    }

    /// Consumes the selector, returning the field list and the ordered sort keys.
    pub fn finish(self) -> (Vec<FieldProperties>, Vec<SortKey>) {
        let mut keys: Vec<(usize, SortKey)> = self
            .props
            .iter()
            .enumerate()
            .filter_map(|(field, p)| {
                p.sort.map(|spec| {
                    (
                        spec.position,
                        SortKey {
                            field,
                            dir: spec.dir,
                            dtype: p.dtype,
                        },
                    )
                })
            })
            .collect();
        keys.sort_by_key(|(position, _)| *position);
        (self.props, keys.into_iter().map(|(_, key)| key).collect())
    }
}
