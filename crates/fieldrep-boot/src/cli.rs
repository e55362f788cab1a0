use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fieldrep::{ReportOpts, DEFAULT_COLUMNS};

use crate::commands::{
    expand_fields, DEFAULT_ENTRY_FIELDS, DEFAULT_PROFILE_FIELDS, VERBOSE_ENTRY_FIELDS,
    VERBOSE_PROFILE_FIELDS,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "fieldrep-boot")]
#[command(about = "Report on boot loader entries and OS profiles")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Fields to display, comma separated ("help" lists them)
    /// A leading '+' appends to the default fields
    #[arg(long = "options", short = 'o', value_name = "FIELDS", global = true)]
    pub fields: Option<String>,

    /// Sort keys, comma separated, each optionally prefixed with '+' or '-'
    #[arg(long = "sort", short = 'O', value_name = "KEYS", global = true, allow_hyphen_values = true)]
    pub sort: Option<String>,

    /// Suppress the heading line
    #[arg(long, global = true)]
    pub noheadings: bool,

    /// Column separator
    #[arg(long, default_value = " ", global = true)]
    pub separator: String,

    /// Write every value as PREFIXNAME=value
    #[arg(long, value_name = "PREFIX", global = true)]
    pub name_prefix: Option<String>,

    /// Quote every value
    #[arg(long, global = true)]
    pub quoted: bool,

    /// Write rows as they are found (no sizing or sorting)
    #[arg(long, global = true)]
    pub unbuffered: bool,

    /// Print one line per field instead of one per object
    #[arg(long, global = true)]
    pub rows: bool,

    /// Show more fields by default
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Read entries and profiles from a JSON file instead of the bundled sample
    #[arg(long, value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// List boot loader entries
    Entries,
    /// List OS profiles
    Profiles,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The field list for the selected command, with defaults applied.
    pub fn output_fields(&self) -> String {
        let default = match (self.command, self.verbose) {
            (Command::Entries, false) => DEFAULT_ENTRY_FIELDS,
            (Command::Entries, true) => VERBOSE_ENTRY_FIELDS,
            (Command::Profiles, false) => DEFAULT_PROFILE_FIELDS,
            (Command::Profiles, true) => VERBOSE_PROFILE_FIELDS,
        };
        expand_fields(self.fields.as_deref(), default)
    }

    /// Builds report options from the flags. `columns` is the terminal width
    /// if known.
    pub fn report_opts(&self, columns: Option<usize>) -> ReportOpts {
        ReportOpts::default()
            .columns(columns.unwrap_or(DEFAULT_COLUMNS))
            .headings(!self.noheadings)
            .buffered(!self.unbuffered)
            .separator(self.separator.as_str())
            .field_name_prefix(self.name_prefix.clone().unwrap_or_default())
            .unquoted(!self.quoted)
            .columns_as_rows(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("fieldrep-boot").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let args = parse(&["entries"]);
        assert_eq!(args.command, Command::Entries);
        assert_eq!(args.output_fields(), DEFAULT_ENTRY_FIELDS);
        assert_eq!(args.report_opts(None), ReportOpts::default());
    }

    #[test]
    fn verbose_and_append() {
        let args = parse(&["profiles", "-v"]);
        assert_eq!(args.output_fields(), VERBOSE_PROFILE_FIELDS);

        let args = parse(&["entries", "-o", "+title"]);
        assert_eq!(args.output_fields(), format!("{},title", DEFAULT_ENTRY_FIELDS));

        let args = parse(&["entries", "-o", "title"]);
        assert_eq!(args.output_fields(), "title");
    }

    #[test]
    fn sort_keys_accept_leading_dash() {
        let args = parse(&["entries", "-O", "-version,bootid"]);
        assert_eq!(args.sort.as_deref(), Some("-version,bootid"));

        let args = parse(&["entries", "--sort=-version"]);
        assert_eq!(args.sort.as_deref(), Some("-version"));
    }

    #[test]
    fn output_flags() {
        let args = parse(&[
            "entries",
            "--noheadings",
            "--separator",
            ",",
            "--name-prefix",
            "BOOM_",
            "--quoted",
            "--unbuffered",
            "--rows",
        ]);
        let opts = args.report_opts(Some(120));
        assert_eq!(opts.columns, 120);
        assert!(!opts.headings);
        assert!(!opts.buffered);
        assert_eq!(opts.separator, ",");
        assert_eq!(opts.field_name_prefix, "BOOM_");
        assert!(!opts.unquoted);
        assert!(opts.columns_as_rows);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(CliArgs::try_parse_from(["fieldrep-boot"]).is_err());
    }
}
