//! `markbook search` - search students by name

use markbook_core::error::Result;
use markbook_core::format::{self, OutputFormat};
use markbook_core::store::RosterStore;

use crate::cli::Cli;
use crate::commands::dispatch::load_or_recover;

pub fn execute(cli: &Cli, store: &RosterStore, query: &str) -> Result<()> {
    let roster = load_or_recover(cli, store)?;
    let matches = roster.find_by_name(query);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No students found with that name.");
            } else {
                for (i, student) in matches.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    print!("{}", format::student_details(student));
                }
            }
        }
    }

    Ok(())
}
