//! `markbook delete` - delete a student from the roster

use std::io::{self, BufRead, Write};

use tracing::debug;

use markbook_core::error::{MarkbookError, Result};
use markbook_core::format::OutputFormat;
use markbook_core::store::RosterStore;

use crate::cli::Cli;
use crate::commands::dispatch::load_or_recover;

pub fn execute(cli: &Cli, store: &RosterStore, id: &str, yes: bool) -> Result<()> {
    let mut roster = load_or_recover(cli, store)?;

    let student = roster
        .find_by_id(id)
        .ok_or_else(|| MarkbookError::StudentNotFound { id: id.to_string() })?;

    if !yes && !confirm(student.name())? {
        if !cli.quiet {
            println!("Deletion cancelled.");
        }
        return Ok(());
    }

    let removed = roster.remove(id)?;
    store.save(&roster)?;
    debug!(id = removed.id(), "student deleted");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "deleted": removed.id() }));
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted student {} ({}).", removed.name(), removed.id());
            }
        }
    }

    Ok(())
}

fn confirm(name: &str) -> Result<bool> {
    print!("Delete {}? (yes/no): ", name);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("yes"))
}
