//! Records folder configuration and initialization

use crate::error::{Result, StudentFilesError};
use crate::io::activity_log::ActivityLog;
use crate::io::console::Console;
use log::{debug, error};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Configuration for the records folder and the files kept inside it
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// Folder holding records, the activity log and the archive
    pub records_dir: PathBuf,
    /// File name of the activity log inside `records_dir`
    pub log_file_name: String,
    /// Name of the archive sub-folder inside `records_dir`
    pub archive_dir_name: String,
    /// Prefix given to backup copies
    pub backup_prefix: String,
    /// How many names each record file holds
    pub names_per_record: usize,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            records_dir: PathBuf::from("StudentFiles"),
            log_file_name: "activity_log.txt".to_string(),
            archive_dir_name: "Archive".to_string(),
            backup_prefix: "backup_".to_string(),
            names_per_record: 5,
        }
    }
}

impl WorkspaceConfig {
    /// Default layout rooted at `records_dir`
    pub fn in_dir(records_dir: impl Into<PathBuf>) -> Self {
        Self {
            records_dir: records_dir.into(),
            ..Default::default()
        }
    }

    /// Path of `file_name` inside the records folder
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.records_dir.join(file_name)
    }

    pub fn log_path(&self) -> PathBuf {
        self.records_dir.join(&self.log_file_name)
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.records_dir.join(&self.archive_dir_name)
    }

    /// Name of the backup copy made for `file_name`
    pub fn backup_name(&self, file_name: &str) -> String {
        format!("{}{}", self.backup_prefix, file_name)
    }

    /// Folder name as shown in prompts and listings
    pub fn folder_label(&self) -> String {
        self.records_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.records_dir.display().to_string())
    }
}

/// What [`RecordsFolder::initialize`] found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderStatus {
    /// The folder was missing and has been created
    Created(PathBuf),
    /// The folder was already there
    Existing(PathBuf),
}

impl FolderStatus {
    /// Absolute path of the folder
    pub fn path(&self) -> &Path {
        match self {
            Self::Created(path) | Self::Existing(path) => path,
        }
    }
}

/// The working folder of the file workflow
pub struct RecordsFolder;

impl RecordsFolder {
    /// Make sure the records folder exists and report its absolute path
    ///
    /// Failure here is fatal for the workflow: it is printed, written to the
    /// activity log on a best-effort basis and returned as
    /// [`StudentFilesError::FolderInit`].
    pub fn initialize(
        config: &WorkspaceConfig,
        log: &ActivityLog,
        console: &mut Console<'_>,
    ) -> Result<FolderStatus> {
        match prepare(&config.records_dir) {
            Ok(status) => {
                match &status {
                    FolderStatus::Created(path) => {
                        console.say(format!("Created folder: {}", path.display()))
                    }
                    FolderStatus::Existing(path) => {
                        console.say(format!("Folder already exists: {}", path.display()))
                    }
                }
                debug!("records folder ready: {:?}", status);
                Ok(status)
            }
            Err(e) => {
                error!(
                    "cannot initialize {}: {}",
                    config.records_dir.display(),
                    e
                );
                console.error(format!("Error creating folder: {}", e));
                log.append(&format!("ERROR: Failed to create folder: {}", e), console);
                Err(StudentFilesError::folder_init(&config.records_dir, e))
            }
        }
    }
}

fn prepare(dir: &Path) -> io::Result<FolderStatus> {
    if dir.is_dir() {
        return Ok(FolderStatus::Existing(fs::canonicalize(dir)?));
    }
    if dir.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", dir.display()),
        ));
    }
    fs::create_dir_all(dir)?;
    Ok(FolderStatus::Created(fs::canonicalize(dir)?))
}
