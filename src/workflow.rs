//! The interactive file workflow
//!
//! Steps, in order: folder initialization, record creation, read-back,
//! backup and archive, success log entry, optional deletion, listing of the
//! remaining files. Only a folder initialization failure is returned as an
//! error. Any later failure stops the run at a single boundary that prints
//! a critical-error notice and writes the cause chain to the activity log.

use crate::core::Clock;
use crate::error::Result;
use crate::io::{
    list_entry_names, ActivityLog, ArchiveResult, Archiver, Console, DeletionOutcome,
    DeletionPrompt, Prompt, RecordStore, RecordsFolder, WorkspaceConfig,
};
use anyhow::Context;
use log::{error, info};

/// How a workflow run that got past folder initialization ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowStatus {
    /// Every step ran
    Completed {
        /// File name of the record created in this run
        record: String,
        archive: ArchiveResult,
        deletion: DeletionOutcome,
        /// Entries left in the records folder, sorted by name
        remaining: Vec<String>,
    },
    /// A step failed and the remaining steps were skipped
    Aborted { reason: String },
}

/// Driver for the file workflow
pub struct FileWorkflow {
    config: WorkspaceConfig,
    clock: Clock,
}

impl FileWorkflow {
    pub fn new(config: WorkspaceConfig) -> Self {
        Self::with_clock(config, Clock::System)
    }

    pub fn with_clock(config: WorkspaceConfig, clock: Clock) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Run every step against `prompt` and `console`
    pub fn run(
        &self,
        prompt: &mut dyn Prompt,
        console: &mut Console<'_>,
    ) -> Result<WorkflowStatus> {
        let log = ActivityLog::for_workspace(&self.config, self.clock);
        RecordsFolder::initialize(&self.config, &log, console)?;

        let status = match self.run_steps(&log, prompt, console) {
            Ok(status) => status,
            Err(e) => {
                let reason = describe(&e);
                error!("workflow aborted: {}", reason);
                console.error(format!(
                    "A critical error occurred. Check {} for details.",
                    self.config.log_file_name
                ));
                log.append(&format!("CRITICAL: {}", reason), console);
                WorkflowStatus::Aborted { reason }
            }
        };
        console.flush();
        Ok(status)
    }

    fn run_steps(
        &self,
        log: &ActivityLog,
        prompt: &mut dyn Prompt,
        console: &mut Console<'_>,
    ) -> anyhow::Result<WorkflowStatus> {
        let store = RecordStore::new(&self.config, log, self.clock);
        let record = store
            .create(prompt, console)
            .context("record creation failed")?;
        store
            .inspect(&record, console)
            .context("record read-back failed")?;

        let archive = Archiver::new(&self.config, log)
            .backup_and_archive(&record, console)
            .context("backup and archive failed")?;

        log.append(
            &format!("{} created and archived successfully.", record),
            console,
        );
        info!("{} created and archived", record);

        let deletion = DeletionPrompt::new(&self.config, log, self.clock).run(prompt, console);

        let remaining = list_entry_names(&self.config.records_dir).with_context(|| {
            format!("cannot list {}", self.config.records_dir.display())
        })?;
        console.say(format!(
            "\nRemaining files in {}:",
            self.config.folder_label()
        ));
        for name in &remaining {
            console.say(format!("- {}", name));
        }

        Ok(WorkflowStatus::Completed {
            record,
            archive,
            deletion,
            remaining,
        })
    }
}

/// One-line rendering of an error and its causes, skipping causes whose
/// text the previous message already ends with
fn describe(err: &anyhow::Error) -> String {
    let mut parts: Vec<String> = Vec::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if parts.last().map_or(true, |prev| !prev.ends_with(&text)) {
            parts.push(text);
        }
    }
    parts.join(": ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ScriptedPrompt;
    use chrono::NaiveDate;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    fn clock() -> Clock {
        Clock::Fixed(
            NaiveDate::from_ymd_opt(2025, 10, 31)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_run_without_deletion() {
        let temp_dir = TempDir::new().unwrap();
        let config = WorkspaceConfig::in_dir(temp_dir.path().join("StudentFiles"));
        let workflow = FileWorkflow::with_clock(config.clone(), clock());
        let mut prompt = ScriptedPrompt::new(["A", "B", "C", "D", "E", "no"]);
        let mut console = Console::new(io::sink(), io::sink());

        let status = workflow.run(&mut prompt, &mut console).unwrap();

        match status {
            WorkflowStatus::Completed {
                record,
                deletion,
                remaining,
                ..
            } => {
                assert_eq!(record, "records_2025-10-31.txt");
                assert_eq!(deletion, DeletionOutcome::Skipped);
                assert_eq!(
                    remaining,
                    vec!["Archive", "activity_log.txt", "records_2025-10-31.txt"]
                );
            }
            other => panic!("unexpected status: {:?}", other),
        }
        let logged = fs::read_to_string(config.log_path()).unwrap();
        assert_eq!(
            logged,
            "[2025-10-31 10:30:00] records_2025-10-31.txt created and archived successfully.\n"
        );
    }

    #[test]
    fn test_failure_stops_later_steps() {
        let temp_dir = TempDir::new().unwrap();
        let config = WorkspaceConfig::in_dir(temp_dir.path());
        let workflow = FileWorkflow::with_clock(config.clone(), clock());
        let mut prompt = ScriptedPrompt::new(["A", "B"]);
        let mut err = Vec::new();

        let status = {
            let mut console = Console::new(io::sink(), &mut err);
            workflow.run(&mut prompt, &mut console).unwrap()
        };

        assert!(matches!(status, WorkflowStatus::Aborted { .. }));
        assert!(!config.archive_dir().exists());
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("A critical error occurred. Check activity_log.txt for details."));

        let logged = fs::read_to_string(config.log_path()).unwrap();
        let lines: Vec<&str> = logged.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("ERROR: Failed to create/write records_2025-10-31.txt"));
        assert!(lines[1].contains("CRITICAL: record creation failed: cannot read input"));
    }

    #[test]
    fn test_describe_skips_repeated_causes() {
        let inner = crate::error::StudentFilesError::prompt(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        ));
        let err = anyhow::Error::new(inner).context("record creation failed");

        assert_eq!(
            describe(&err),
            "record creation failed: cannot read input: end of input"
        );
    }

    #[test]
    fn test_folder_failure_is_returned() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("StudentFiles");
        fs::write(&blocker, "").unwrap();
        let workflow = FileWorkflow::with_clock(WorkspaceConfig::in_dir(&blocker), clock());
        let mut prompt = ScriptedPrompt::new(["unused"]);
        let mut console = Console::new(io::sink(), io::sink());

        let err = workflow.run(&mut prompt, &mut console).unwrap_err();

        assert!(err.is_fatal());
        assert!(prompt.asked().is_empty());
    }
}
