//! `markbook report` - print the class report

use markbook_core::error::Result;
use markbook_core::format::{self, OutputFormat};
use markbook_core::store::RosterStore;

use crate::cli::Cli;
use crate::commands::dispatch::load_or_recover;

pub fn execute(cli: &Cli, store: &RosterStore) -> Result<()> {
    let roster = load_or_recover(cli, store)?;
    let report = roster.report();

    match cli.format {
        OutputFormat::Json => {
            // `null` when the roster is empty
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => match report {
            Some(report) => print!("{}", format::report_text(&report)),
            None => println!("No students to generate a report for."),
        },
    }

    Ok(())
}
