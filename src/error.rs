//! Error types for the studentfiles library
//!
//! This module provides error handling for every fallible step of the file
//! workflow and the report generator: folder setup, record I/O, archiving,
//! prompting and report output.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum StudentFilesError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The records folder could not be created or is not a directory
    #[error("cannot initialize folder {path}: {source}")]
    FolderInit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record file could not be created or written
    #[error("cannot write record {file}: {source}")]
    RecordWrite {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// A record file could not be read or inspected
    #[error("cannot read record {file}: {source}")]
    RecordRead {
        file: String,
        #[source]
        source: std::io::Error,
    },

    /// One stage of the backup-and-archive sequence failed
    #[error("{stage} failed for {file}: {source}")]
    Archive {
        file: String,
        stage: ArchiveStage,
        #[source]
        source: std::io::Error,
    },

    /// Reading an answer from the input provider failed
    #[error("cannot read input: {source}")]
    Prompt {
        #[source]
        source: std::io::Error,
    },

    /// A user-supplied name does not denote a plain file inside the folder
    #[error("Invalid file name {name:?}: {reason}")]
    InvalidFileName { name: String, reason: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StudentFilesError>;

/// The step of [`crate::io::Archiver::backup_and_archive`] that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveStage {
    Copy,
    CreateFolder,
    Move,
    List,
}

impl fmt::Display for ArchiveStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => write!(f, "backup copy"),
            Self::CreateFolder => write!(f, "archive folder creation"),
            Self::Move => write!(f, "move to archive"),
            Self::List => write!(f, "archive listing"),
        }
    }
}

impl StudentFilesError {
    /// Create a new folder initialization error
    pub fn folder_init(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FolderInit {
            path: path.into(),
            source,
        }
    }

    /// Create a new record write error
    pub fn record_write(file: impl Into<String>, source: std::io::Error) -> Self {
        Self::RecordWrite {
            file: file.into(),
            source,
        }
    }

    /// Create a new record read error
    pub fn record_read(file: impl Into<String>, source: std::io::Error) -> Self {
        Self::RecordRead {
            file: file.into(),
            source,
        }
    }

    /// Create a new archive error for the given stage
    pub fn archive(file: impl Into<String>, stage: ArchiveStage, source: std::io::Error) -> Self {
        Self::Archive {
            file: file.into(),
            stage,
            source,
        }
    }

    /// Create a new prompt error
    pub fn prompt(source: std::io::Error) -> Self {
        Self::Prompt { source }
    }

    /// Create a new invalid file name error
    pub fn invalid_file_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFileName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error must terminate the process with a failure status
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FolderInit { .. })
    }
}
