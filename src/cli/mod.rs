//! CLI argument parsing for markbook
//!
//! Supports global flags: --file, --config, --format, --quiet, --verbose

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use markbook_core::format::OutputFormat;
use parse::{parse_format, MarkSpec};

/// Markbook - student record and grade management CLI
#[derive(Parser, Debug)]
#[command(name = "markbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Roster file path
    #[arg(long, short = 'f', global = true, env = "MARKBOOK_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, global = true, env = "MARKBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace|debug|info|warn|error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student to the roster
    Add {
        /// Student ID (unique, case-insensitive)
        id: String,

        /// Student name
        name: String,

        /// Initial marks as SUBJECT=VALUE (repeatable)
        #[arg(long, short = 'm', value_parser = parse::parse_mark_spec, action = clap::ArgAction::Append)]
        mark: Vec<MarkSpec>,
    },

    /// List all students
    List,

    /// Show a single student in full
    Show {
        /// Student ID
        id: String,
    },

    /// Search students by name
    Search {
        /// Case-insensitive name fragment
        query: String,
    },

    /// Update a student's marks
    Update {
        /// Student ID
        id: String,

        /// Marks as SUBJECT=VALUE (repeatable)
        #[arg(long, short = 'm', value_parser = parse::parse_mark_spec, action = clap::ArgAction::Append, required = true)]
        mark: Vec<MarkSpec>,
    },

    /// Delete a student from the roster
    Delete {
        /// Student ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the class report
    Report,
}
