//! Entry and profile reports.

use std::io::Write;

use fieldrep::{Report, ReportOpts, Result};
use log::debug;

use crate::fields::{entry_report_fields, object_types, profile_fields, BootReportObj};
use crate::model::Inventory;

pub const DEFAULT_ENTRY_FIELDS: &str = "bootid,version,osid,osname,osversion";
pub const VERBOSE_ENTRY_FIELDS: &str = "bootid,version,kernel,initramfs,options,machineid";
pub const DEFAULT_PROFILE_FIELDS: &str = "osid,osname,osversion";
pub const VERBOSE_PROFILE_FIELDS: &str = "osid,osname,osversion,unamepattern,osoptions";

/// Resolves the `-o` argument against a default field list.
///
/// No selection gives the default list. A selection starting with `+` is
/// appended to the default list; anything else replaces it.
pub fn expand_fields(selection: Option<&str>, default: &str) -> String {
    match selection {
        None | Some("") => default.to_string(),
        Some(extra) => match extra.strip_prefix('+') {
            Some(rest) => format!("{},{}", default, rest),
            None => extra.to_string(),
        },
    }
}

/// Reports boot entries joined with their OS profiles.
///
/// Returns the number of rows written.
pub fn print_entries<W: Write>(
    inventory: &Inventory,
    output_fields: &str,
    sort_keys: Option<&str>,
    opts: ReportOpts,
    out: W,
) -> Result<usize> {
    let mut report = Report::new(
        object_types()?,
        entry_report_fields(),
        output_fields,
        sort_keys,
        opts,
        out,
    )?;

    for entry in &inventory.entries {
        let profile = inventory.profile(&entry.os_id);
        if profile.is_none() {
            debug!("No profile for entry {} (os_id {})", entry.boot_id, entry.os_id);
        }
        report.report_object(&BootReportObj::new(Some(entry), profile))?;
    }
    report.output()
}

/// Reports OS profiles.
///
/// Returns the number of rows written.
pub fn print_profiles<W: Write>(
    inventory: &Inventory,
    output_fields: &str,
    sort_keys: Option<&str>,
    opts: ReportOpts,
    out: W,
) -> Result<usize> {
    let mut report = Report::new(
        object_types()?,
        profile_fields(),
        output_fields,
        sort_keys,
        opts,
        out,
    )?;

    for profile in &inventory.profiles {
        report.report_object(&BootReportObj::new(None, Some(profile)))?;
    }
    report.output()
}
