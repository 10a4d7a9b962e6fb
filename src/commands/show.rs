//! `markbook show` - show a single student in full

use markbook_core::error::{MarkbookError, Result};
use markbook_core::format::{self, OutputFormat};
use markbook_core::store::RosterStore;

use crate::cli::Cli;
use crate::commands::dispatch::load_or_recover;

pub fn execute(cli: &Cli, store: &RosterStore, id: &str) -> Result<()> {
    let roster = load_or_recover(cli, store)?;

    let student = roster
        .find_by_id(id)
        .ok_or_else(|| MarkbookError::StudentNotFound { id: id.to_string() })?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(student)?);
        }
        OutputFormat::Human => {
            print!("{}", format::student_details(student));
        }
    }

    Ok(())
}
