mod cli;
mod commands;
mod fields;
mod model;

use std::io;

use anyhow::Result;
use log::debug;
use terminal_size::{terminal_size, Width};

use cli::{CliArgs, Command};
use model::Inventory;

fn terminal_columns() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| usize::from(w))
}

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse_args();
    let inventory = match &args.data {
        Some(path) => Inventory::load(path)?,
        None => Inventory::sample()?,
    };

    let output_fields = args.output_fields();
    let opts = args.report_opts(terminal_columns());
    debug!("Output fields: {}, options: {:?}", output_fields, opts);

    let out = io::stdout().lock();
    let sort = args.sort.as_deref();
    let rows = match args.command {
        Command::Entries => commands::print_entries(&inventory, &output_fields, sort, opts, out)?,
        Command::Profiles => commands::print_profiles(&inventory, &output_fields, sort, opts, out)?,
    };
    debug!("Wrote {} rows", rows);
    Ok(())
}
