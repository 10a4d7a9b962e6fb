//! `markbook update` - update a student's marks

use tracing::debug;

use markbook_core::error::Result;
use markbook_core::format::OutputFormat;
use markbook_core::store::RosterStore;

use crate::cli::parse::MarkSpec;
use crate::cli::Cli;
use crate::commands::dispatch::load_or_recover;

pub fn execute(cli: &Cli, store: &RosterStore, id: &str, marks: &[MarkSpec]) -> Result<()> {
    let mut roster = load_or_recover(cli, store)?;

    let pairs: Vec<(String, f64)> = marks
        .iter()
        .map(|m| (m.subject.clone(), m.value))
        .collect();
    let student = roster.update(id, &pairs)?.clone();

    store.save(&roster)?;
    debug!(id = student.id(), marks = pairs.len(), "student updated");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&student)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Updated student {} ({}) - GPA {:.2}, grade {}",
                    student.name(),
                    student.id(),
                    student.gpa(),
                    student.grade()
                );
            }
        }
    }

    Ok(())
}
