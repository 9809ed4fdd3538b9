//! Optional, user-confirmed deletion of a file in the records folder
//!
//! Nothing in here escalates: every failure is printed, logged and folded
//! into [`DeletionOutcome::Failed`].

use crate::core::{Clock, RecordSheet};
use crate::error::{Result, StudentFilesError};
use crate::io::activity_log::ActivityLog;
use crate::io::console::Console;
use crate::io::prompt::Prompt;
use crate::io::workspace::WorkspaceConfig;
use log::{info, warn};
use std::fs;
use std::path::{Component, Path};

/// What the deletion step ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The user did not confirm
    Skipped,
    /// The named file was removed
    Deleted(String),
    /// No such file in the records folder
    NotFound(String),
    /// The step failed; the reason was printed and logged
    Failed(String),
}

/// Interactive deletion step of the file workflow
pub struct DeletionPrompt<'a> {
    config: &'a WorkspaceConfig,
    log: &'a ActivityLog,
    clock: Clock,
}

impl<'a> DeletionPrompt<'a> {
    pub fn new(config: &'a WorkspaceConfig, log: &'a ActivityLog, clock: Clock) -> Self {
        Self { config, log, clock }
    }

    /// Ask for confirmation and a file name, then delete that file
    pub fn run(&self, prompt: &mut dyn Prompt, console: &mut Console<'_>) -> DeletionOutcome {
        match self.try_run(prompt, console) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("delete step failed: {}", e);
                console.error(format!("Error during delete operation: {}", e));
                self.log
                    .append(&format!("ERROR: Delete operation failed: {}", e), console);
                DeletionOutcome::Failed(e.to_string())
            }
        }
    }

    fn try_run(
        &self,
        prompt: &mut dyn Prompt,
        console: &mut Console<'_>,
    ) -> Result<DeletionOutcome> {
        console.flush();
        let choice = prompt
            .ask(&format!(
                "\nWould you like to delete a file from {}? Type 'Yes' to confirm: ",
                self.config.folder_label()
            ))
            .map_err(StudentFilesError::prompt)?;

        if !choice.trim().eq_ignore_ascii_case("yes") {
            console.say("Delete step skipped.");
            return Ok(DeletionOutcome::Skipped);
        }

        let example = RecordSheet::file_name_for(self.clock.today());
        let name = prompt
            .ask(&format!(
                "Enter the exact filename to delete (e.g., {}): ",
                example
            ))
            .map_err(StudentFilesError::prompt)?
            .trim()
            .to_string();

        ensure_plain_file_name(&name)?;
        let target = self.config.path_of(&name);

        if !target.exists() {
            console.say(format!("File not found: {}", name));
            self.log.append(
                &format!("Attempted delete failed - file not found: {}", name),
                console,
            );
            return Ok(DeletionOutcome::NotFound(name));
        }

        fs::remove_file(&target)?;
        info!("deleted {}", target.display());
        console.say(format!("{} has been deleted.", name));
        self.log.append(&format!("{} deleted by user.", name), console);
        Ok(DeletionOutcome::Deleted(name))
    }
}

/// Only a single, normal path component may be deleted, so the target
/// always stays inside the records folder
fn ensure_plain_file_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        (None, _) => Err(StudentFilesError::invalid_file_name(name, "empty file name")),
        _ => Err(StudentFilesError::invalid_file_name(
            name,
            "must name a file directly inside the records folder",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::prompt::ScriptedPrompt;
    use chrono::NaiveDate;
    use std::io;
    use tempfile::TempDir;

    fn clock() -> Clock {
        Clock::Fixed(
            NaiveDate::from_ymd_opt(2025, 10, 31)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        )
    }

    fn run_with(config: &WorkspaceConfig, answers: &[&str]) -> (DeletionOutcome, ScriptedPrompt) {
        let log = ActivityLog::for_workspace(config, clock());
        let mut prompt = ScriptedPrompt::new(answers.iter().copied());
        let mut console = Console::new(io::sink(), io::sink());
        let outcome = DeletionPrompt::new(config, &log, clock()).run(&mut prompt, &mut console);
        (outcome, prompt)
    }

    fn log_lines(config: &WorkspaceConfig) -> Vec<String> {
        fs::read_to_string(config.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_confirmed_delete_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = WorkspaceConfig::in_dir(temp_dir.path());
        fs::write(config.path_of("records_2025-10-31.txt"), "Ada\n").unwrap();

        let (outcome, prompt) = run_with(&config, &["YES", "records_2025-10-31.txt"]);

        assert_eq!(
            outcome,
            DeletionOutcome::Deleted("records_2025-10-31.txt".to_string())
        );
        assert!(!config.path_of("records_2025-10-31.txt").exists());
        assert!(prompt.asked()[1].contains("(e.g., records_2025-10-31.txt)"));
        let lines = log_lines(&config);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("records_2025-10-31.txt deleted by user."));
    }

    #[test]
    fn test_missing_file_is_logged_once() {
        let temp_dir = TempDir::new().unwrap();
        let config = WorkspaceConfig::in_dir(temp_dir.path());
        fs::write(config.path_of("keep.txt"), "").unwrap();

        let (outcome, _) = run_with(&config, &["yes", "ghost.txt"]);

        assert_eq!(outcome, DeletionOutcome::NotFound("ghost.txt".to_string()));
        assert!(config.path_of("keep.txt").exists());
        let lines = log_lines(&config);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("Attempted delete failed - file not found: ghost.txt"));
    }

    #[test]
    fn test_declined_has_no_side_effect() {
        let temp_dir = TempDir::new().unwrap();
        let config = WorkspaceConfig::in_dir(temp_dir.path());
        fs::write(config.path_of("keep.txt"), "").unwrap();

        let (outcome, prompt) = run_with(&config, &["no"]);

        assert_eq!(outcome, DeletionOutcome::Skipped);
        assert_eq!(prompt.asked().len(), 1);
        assert!(config.path_of("keep.txt").exists());
        assert!(!config.log_path().exists());
    }

    #[test]
    fn test_escaping_the_folder_is_refused() {
        let temp_dir = TempDir::new().unwrap();
        let config = WorkspaceConfig::in_dir(temp_dir.path().join("StudentFiles"));
        fs::create_dir(&config.records_dir).unwrap();
        fs::write(temp_dir.path().join("outside.txt"), "").unwrap();

        let (outcome, _) = run_with(&config, &["yes", "../outside.txt"]);

        assert!(matches!(outcome, DeletionOutcome::Failed(_)));
        assert!(temp_dir.path().join("outside.txt").exists());
        let lines = log_lines(&config);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("ERROR: Delete operation failed"));
    }

    #[test]
    fn test_directory_target_fails_without_escalating() {
        let temp_dir = TempDir::new().unwrap();
        let config = WorkspaceConfig::in_dir(temp_dir.path());
        fs::create_dir(config.archive_dir()).unwrap();

        let (outcome, _) = run_with(&config, &["yes", "Archive"]);

        assert!(matches!(outcome, DeletionOutcome::Failed(_)));
        assert!(config.archive_dir().is_dir());
    }

    #[test]
    fn test_input_failure_is_swallowed() {
        let temp_dir = TempDir::new().unwrap();
        let config = WorkspaceConfig::in_dir(temp_dir.path());

        let (outcome, _) = run_with(&config, &[]);

        assert!(matches!(outcome, DeletionOutcome::Failed(_)));
    }
}
