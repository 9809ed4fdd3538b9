//! The score report generator: roster JSON in, sorted CSV out

use crate::core::compute_report_rows;
use crate::io::{Console, ReportWriter, RosterReader, WriteStatus};
use log::debug;
use std::path::PathBuf;

/// Input and output locations of the report generator
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Roster JSON file
    pub input: PathBuf,
    /// CSV report file
    pub output: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("students.json"),
            output: PathBuf::from("report.csv"),
        }
    }
}

/// How a report run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    /// The CSV was written
    Written { path: PathBuf, rows: usize },
    /// The roster was missing, malformed or unreadable; no CSV was produced
    NoInput,
    /// Writing the CSV failed
    WriteFailed(String),
}

/// Load the roster, compute averages and write the CSV report
///
/// Never fails: every problem has already been reported on `console` when
/// this returns.
pub fn generate_report(config: &ReportConfig, console: &mut Console<'_>) -> ReportStatus {
    let entries = match RosterReader::new(&config.input).load(console).into_entries() {
        Some(entries) => entries,
        None => {
            debug!("no roster loaded; skipping report");
            return ReportStatus::NoInput;
        }
    };

    let rows = compute_report_rows(&entries);
    let status = match ReportWriter::new(&config.output).write(rows, console) {
        WriteStatus::Written { path, rows } => ReportStatus::Written { path, rows },
        WriteStatus::Failed(reason) => ReportStatus::WriteFailed(reason),
    };
    console.flush();
    status
}
