//! `markbook list` - list all students

use markbook_core::error::Result;
use markbook_core::format::{self, OutputFormat};
use markbook_core::store::RosterStore;

use crate::cli::Cli;
use crate::commands::dispatch::load_or_recover;

pub fn execute(cli: &Cli, store: &RosterStore) -> Result<()> {
    let roster = load_or_recover(cli, store)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&roster)?);
        }
        OutputFormat::Human => {
            if roster.is_empty() {
                println!("No students found.");
            } else {
                print!("{}", format::roster_table(&roster));
            }
        }
    }

    Ok(())
}
