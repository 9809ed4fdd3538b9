//! Loading the JSON roster
//!
//! A missing file, a malformed file and an unreadable file are all normal
//! outcomes here; they are reported on the console and surfaced as a
//! [`LoadOutcome`] rather than an error.

use crate::core::RosterEntry;
use crate::io::console::Console;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of reading the roster file
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Vec<RosterEntry>),
    /// The input file does not exist
    Missing,
    /// The file is not a JSON array of student objects
    Malformed(String),
    /// The file exists but could not be read
    Unreadable(String),
}

impl LoadOutcome {
    /// Entries when loading succeeded; every failure collapses to `None`
    pub fn into_entries(self) -> Option<Vec<RosterEntry>> {
        match self {
            Self::Loaded(entries) => Some(entries),
            Self::Missing | Self::Malformed(_) | Self::Unreadable(_) => None,
        }
    }
}

/// Reader for the roster JSON file
pub struct RosterReader {
    path: PathBuf,
}

impl RosterReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the roster, printing a notice for every failure
    pub fn load(&self, console: &mut Console<'_>) -> LoadOutcome {
        if !self.path.exists() {
            warn!("roster {} is missing", self.path.display());
            console.say(format!(
                "Input file '{}' not found. Please ensure it exists in the project folder.",
                self.path.display()
            ));
            return LoadOutcome::Missing;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                warn!("cannot read roster {}: {}", self.path.display(), e);
                console.say(format!(
                    "Unexpected error reading {}: {}",
                    self.path.display(),
                    e
                ));
                return LoadOutcome::Unreadable(e.to_string());
            }
        };

        match serde_json::from_str::<Vec<RosterEntry>>(&content) {
            Ok(entries) => {
                debug!("loaded {} roster entries", entries.len());
                LoadOutcome::Loaded(entries)
            }
            Err(e) => {
                warn!("roster {} is malformed: {}", self.path.display(), e);
                console.say(format!("Error decoding JSON: {}", e));
                LoadOutcome::Malformed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load(path: &Path) -> (LoadOutcome, String) {
        let mut out = Vec::new();
        let outcome = {
            let mut console = Console::new(&mut out, std::io::sink());
            RosterReader::new(path).load(&mut console)
        };
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_loads_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.json");
        fs::write(
            &path,
            r#"[{"id": 1, "name": "A", "scores": [80, 90]}, {"id": "x2", "name": "B"}]"#,
        )
        .unwrap();

        let (outcome, out) = load(&path);
        let entries = outcome.into_entries().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].scores, Some(vec![80.0, 90.0]));
        assert_eq!(entries[1].scores, None);
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let (outcome, out) = load(&temp_dir.path().join("students.json"));

        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(out.starts_with("Input file '"));
        assert!(out.contains("not found"));
    }

    #[test]
    fn test_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.json");
        fs::write(&path, "[{\"id\": 1,").unwrap();

        let (outcome, out) = load(&path);

        assert!(matches!(outcome, LoadOutcome::Malformed(_)));
        assert!(out.starts_with("Error decoding JSON: "));
        assert!(outcome.into_entries().is_none());
    }

    #[test]
    fn test_non_array_document_is_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.json");
        fs::write(&path, r#"{"id": 1}"#).unwrap();

        let (outcome, _) = load(&path);
        assert!(matches!(outcome, LoadOutcome::Malformed(_)));
    }

    #[test]
    fn test_directory_is_unreadable() {
        let temp_dir = TempDir::new().unwrap();
        let (outcome, out) = load(temp_dir.path());

        assert!(matches!(outcome, LoadOutcome::Unreadable(_)));
        assert!(out.starts_with("Unexpected error reading "));
    }
}
