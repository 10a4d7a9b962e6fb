//! Roster persistence
//!
//! One roster snapshot per file, stored as versioned JSON:
//! `{"version": 1, "students": [...]}`. The file is overwritten wholesale
//! on every save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MarkbookError, Result};
use crate::roster::Roster;

/// Roster file format version
pub const ROSTER_VERSION: u32 = 1;

/// Default roster file name
pub const DEFAULT_ROSTER_FILE: &str = "students.json";

#[derive(Debug, Serialize, Deserialize)]
struct RosterFile {
    version: u32,
    students: Roster,
}

/// Persistence adapter for a roster file
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RosterStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted roster.
    ///
    /// A missing file yields an empty roster. A file that cannot be parsed,
    /// or that carries an unknown version, is an `InvalidRoster` error;
    /// callers treat that as non-fatal by falling back to an empty roster.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Roster> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("roster file missing, starting empty");
                return Ok(Roster::new());
            }
            Err(e) => return Err(e.into()),
        };

        let file: RosterFile =
            serde_json::from_str(&content).map_err(|e| MarkbookError::InvalidRoster {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        if file.version != ROSTER_VERSION {
            return Err(MarkbookError::InvalidRoster {
                path: self.path.clone(),
                reason: format!(
                    "unsupported version {} (expected {})",
                    file.version, ROSTER_VERSION
                ),
            });
        }

        tracing::debug!(students = file.students.len(), "roster loaded");
        Ok(file.students)
    }

    /// Write the full roster, replacing any prior content
    #[tracing::instrument(skip(self, roster), fields(path = %self.path.display(), students = roster.len()))]
    pub fn save(&self, roster: &Roster) -> Result<()> {
        let file = RosterFile {
            version: ROSTER_VERSION,
            students: roster.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, content)?;
        tracing::debug!("roster saved");
        Ok(())
    }
}
