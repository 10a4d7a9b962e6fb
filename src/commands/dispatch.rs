//! Command dispatch logic for markbook

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use markbook_core::config::Config;
use markbook_core::error::{MarkbookError, Result};
use markbook_core::roster::Roster;
use markbook_core::store::{RosterStore, DEFAULT_ROSTER_FILE};

use crate::cli::{Cli, Commands};
use crate::commands;

/// Default configuration file name, picked up when present
const CONFIG_FILE: &str = "markbook.toml";

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;
    let store = RosterStore::new(roster_path(cli, &config));

    debug!(elapsed = ?start.elapsed(), path = %store.path().display(), "resolve_store");

    match &cli.command {
        None => commands::session::run(cli, &config, &store),

        Some(Commands::Add { id, name, mark }) => {
            commands::add::execute(cli, &config, &store, id, name, mark)
        }

        Some(Commands::List) => commands::list::execute(cli, &store),

        Some(Commands::Show { id }) => commands::show::execute(cli, &store, id),

        Some(Commands::Search { query }) => commands::search::execute(cli, &store, query),

        Some(Commands::Update { id, mark }) => commands::update::execute(cli, &store, id, mark),

        Some(Commands::Delete { id, yes }) => commands::delete::execute(cli, &store, id, *yes),

        Some(Commands::Report) => commands::report::execute(cli, &store),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(path) = &cli.config {
        return Config::load(path);
    }
    let default = PathBuf::from(CONFIG_FILE);
    if default.exists() {
        return Config::load(&default);
    }
    Ok(Config::default())
}

/// Resolve the roster file path: flag > env (via clap) > config > default
fn roster_path(cli: &Cli, config: &Config) -> PathBuf {
    if let Some(path) = &cli.file {
        return path.clone();
    }
    if let Some(path) = &config.roster_path {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_ROSTER_FILE)
}

/// Load the roster, falling back to an empty one (with a warning) when the
/// file exists but cannot be parsed
pub fn load_or_recover(cli: &Cli, store: &RosterStore) -> Result<Roster> {
    match store.load() {
        Ok(roster) => Ok(roster),
        Err(e @ MarkbookError::InvalidRoster { .. }) => {
            if !cli.quiet {
                eprintln!("warning: {} - starting with an empty roster", e);
            }
            Ok(Roster::new())
        }
        Err(e) => Err(e),
    }
}
