//! Backup copies and the archive sub-folder

use crate::error::{ArchiveStage, Result, StudentFilesError};
use crate::io::activity_log::ActivityLog;
use crate::io::console::Console;
use crate::io::fs::list_entry_names;
use crate::io::workspace::WorkspaceConfig;
use log::{debug, warn};
use std::fs;
use std::path::PathBuf;

/// Where a backup ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveResult {
    /// File name of the backup copy
    pub backup_name: String,
    /// The archive sub-folder
    pub archive_dir: PathBuf,
    /// Full path of the backup inside the archive
    pub archived_path: PathBuf,
    /// Entries of the archive after the move, sorted by name
    pub archive_listing: Vec<String>,
}

/// Copies record files into the archive sub-folder
pub struct Archiver<'a> {
    config: &'a WorkspaceConfig,
    log: &'a ActivityLog,
}

impl<'a> Archiver<'a> {
    pub fn new(config: &'a WorkspaceConfig, log: &'a ActivityLog) -> Self {
        Self { config, log }
    }

    /// Copy `file_name` to a `backup_` sibling, move that copy into the
    /// archive folder and list the archive
    ///
    /// The original stays where it is. A backup of the same name already in
    /// the archive is replaced. Nothing is rolled back when a later stage
    /// fails.
    pub fn backup_and_archive(
        &self,
        file_name: &str,
        console: &mut Console<'_>,
    ) -> Result<ArchiveResult> {
        match self.run_stages(file_name, console) {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!("archiving {} failed: {}", file_name, e);
                console.error(format!("Error during backup/archive: {}", e));
                self.log.append(
                    &format!("ERROR: Backup/archive failed for {}: {}", file_name, e),
                    console,
                );
                Err(e)
            }
        }
    }

    fn run_stages(&self, file_name: &str, console: &mut Console<'_>) -> Result<ArchiveResult> {
        let fail = |stage: ArchiveStage| {
            move |e: std::io::Error| StudentFilesError::archive(file_name, stage, e)
        };

        let source = self.config.path_of(file_name);
        let backup_name = self.config.backup_name(file_name);
        let backup_path = self.config.path_of(&backup_name);

        fs::copy(&source, &backup_path).map_err(fail(ArchiveStage::Copy))?;
        console.say(format!("Backup created: {}", backup_name));

        let archive_dir = self.config.archive_dir();
        fs::create_dir_all(&archive_dir).map_err(fail(ArchiveStage::CreateFolder))?;

        let archived_path = archive_dir.join(&backup_name);
        fs::rename(&backup_path, &archived_path).map_err(fail(ArchiveStage::Move))?;
        console.say(format!("Backup moved to Archive: {}", archived_path.display()));
        debug!("archived {} as {}", file_name, archived_path.display());

        let archive_listing = list_entry_names(&archive_dir).map_err(fail(ArchiveStage::List))?;
        console.say("\nFiles in Archive folder:");
        for name in &archive_listing {
            console.say(format!("- {}", name));
        }

        Ok(ArchiveResult {
            backup_name,
            archive_dir,
            archived_path,
            archive_listing,
        })
    }
}
