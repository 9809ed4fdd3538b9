//! Append-only activity log
//!
//! Each entry is one `[YYYY-MM-DD HH:MM:SS] message` line. Writing the log
//! is best-effort: a failure is reported on the console's error stream and
//! returned as a [`LogStatus`], never as an error.

use crate::core::Clock;
use crate::io::console::Console;
use crate::io::workspace::WorkspaceConfig;
use log::{trace, warn};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Outcome of a single append
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogStatus {
    Written,
    Failed(String),
}

impl LogStatus {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }
}

/// Handle on the shared activity log file
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
    clock: Clock,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>, clock: Clock) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    /// Log file of the given workspace
    pub fn for_workspace(config: &WorkspaceConfig, clock: Clock) -> Self {
        Self::new(config.log_path(), clock)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line, creating the parent folder if needed
    pub fn append(&self, message: &str, console: &mut Console<'_>) -> LogStatus {
        match self.try_append(message) {
            Ok(()) => {
                trace!("logged: {}", message);
                LogStatus::Written
            }
            Err(e) => {
                warn!("cannot append to {}: {}", self.path.display(), e);
                console.error(format!("Failed to write log: {}", e));
                LogStatus::Failed(e.to_string())
            }
        }
    }

    fn try_append(&self, message: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[{}] {}", self.clock.timestamp(), message)
    }
}
