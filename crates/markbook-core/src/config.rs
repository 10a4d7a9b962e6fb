//! Configuration for markbook
//!
//! Stored as TOML. Drives the enumerated subject set and the default
//! roster path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MarkbookError, Result};

/// Configuration format version
pub const CONFIG_VERSION: u32 = 1;

/// Subjects every new student is enrolled in when no config overrides them
pub const DEFAULT_SUBJECTS: [&str; 5] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Programming",
    "English",
];

/// Markbook configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,

    /// Subject set every new student is enrolled in
    pub subjects: Vec<String>,

    /// Default roster file path (overridden by --file / MARKBOOK_FILE)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roster_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: CONFIG_VERSION,
            subjects: DEFAULT_SUBJECTS.iter().map(|s| s.to_string()).collect(),
            roster_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate(path)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MarkbookError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(MarkbookError::InvalidConfig {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported version {} (expected {})",
                    self.version, CONFIG_VERSION
                ),
            });
        }
        if self.subjects.is_empty() {
            return Err(MarkbookError::InvalidConfig {
                path: path.to_path_buf(),
                reason: "subjects must not be empty".to_string(),
            });
        }
        let mut seen = std::collections::BTreeSet::new();
        for subject in &self.subjects {
            if !seen.insert(subject.to_lowercase()) {
                return Err(MarkbookError::InvalidConfig {
                    path: path.to_path_buf(),
                    reason: format!("duplicate subject: {}", subject),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.subjects.len(), 5);
        assert_eq!(config.subjects[0], "Mathematics");
        assert!(config.roster_path.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markbook.toml");

        let config = Config::default();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_and_load_with_roster_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markbook.toml");

        let config = Config {
            roster_path: Some("data/class-a.json".to_string()),
            ..Default::default()
        };
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.roster_path, Some("data/class-a.json".to_string()));
    }

    #[test]
    fn test_custom_subjects() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markbook.toml");
        fs::write(&path, "subjects = [\"Art\", \"Music\"]\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.subjects, vec!["Art", "Music"]);
        assert_eq!(loaded.version, CONFIG_VERSION);
    }

    #[test]
    fn test_empty_subjects_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markbook.toml");
        fs::write(&path, "subjects = []\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, MarkbookError::InvalidConfig { .. }));
    }

    #[test]
    fn test_duplicate_subjects_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markbook.toml");
        fs::write(&path, "subjects = [\"Art\", \"art\"]\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, MarkbookError::InvalidConfig { .. }));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markbook.toml");
        fs::write(&path, "version = 99\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, MarkbookError::InvalidConfig { .. }));
    }
}
