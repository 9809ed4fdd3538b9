//! CSV output of the score report

use crate::core::{sort_by_average_desc, ReportRow};
use crate::error::Result;
use crate::io::console::Console;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Header row of the report
pub const REPORT_HEADER: [&str; 3] = ["id", "name", "average"];

/// Outcome of writing the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteStatus {
    Written { path: PathBuf, rows: usize },
    Failed(String),
}

/// Writes report rows as CSV, best average first
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sort `rows` by average (descending, stable) and write them
    pub fn write(&self, mut rows: Vec<ReportRow>, console: &mut Console<'_>) -> WriteStatus {
        sort_by_average_desc(&mut rows);

        match self.write_rows(&rows) {
            Ok(()) => {
                info!("wrote {} report rows to {}", rows.len(), self.path.display());
                console.say(format!("Report written to {}", self.path.display()));
                WriteStatus::Written {
                    path: self.path.clone(),
                    rows: rows.len(),
                }
            }
            Err(e) => {
                warn!("cannot write report {}: {}", self.path.display(), e);
                console.say(format!("Failed to write {}: {}", self.path.display(), e));
                WriteStatus::Failed(e.to_string())
            }
        }
    }

    fn write_rows(&self, rows: &[ReportRow]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(REPORT_HEADER)?;
        for row in rows {
            let average = row.formatted_average();
            writer.write_record([row.id.as_str(), row.name.as_str(), average.as_str()])?;
        }
        writer.flush()?;
        Ok(())
    }
}
