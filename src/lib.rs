//! studentfiles: managing student record files and score reports
//!
//! This library backs the `studentfiles` command-line tool. It provides two
//! independent drivers:
//!
//! - [`FileWorkflow`]: creates a dated record file of student names inside
//!   a records folder, reads it back, archives a backup copy, keeps an
//!   activity log and optionally deletes a file on request
//! - [`generate_report`]: loads a JSON roster, averages each student's
//!   scores and writes a CSV report sorted by average
//!
//! # Quick Start
//!
//! ## Running the file workflow
//!
//! ```rust,no_run
//! use studentfiles::{Console, FileWorkflow, Result, StdinPrompt, WorkspaceConfig};
//!
//! fn main() -> Result<()> {
//!     let workflow = FileWorkflow::new(WorkspaceConfig::default());
//!     let mut prompt = StdinPrompt::new();
//!     let mut console = Console::stdio();
//!
//!     // Only a folder initialization failure comes back as an error
//!     workflow.run(&mut prompt, &mut console)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Generating a report
//!
//! ```rust,no_run
//! use studentfiles::{generate_report, Console, ReportConfig, ReportStatus};
//!
//! let mut console = Console::stdio();
//! if let ReportStatus::Written { path, rows } =
//!     generate_report(&ReportConfig::default(), &mut console)
//! {
//!     println!("{} rows in {}", rows, path.display());
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): pure types (record sheets, roster entries, averages, clock)
//! - [`io`](crate::io): every step that touches the disk or the terminal
//! - [`workflow`] and [`report`]: the two drivers
//! - [`error`]: the library error type
//!
//! Configuration is passed explicitly ([`WorkspaceConfig`],
//! [`ReportConfig`]) and interactive input goes through the [`Prompt`]
//! trait, so every step can run against a temporary directory and scripted
//! answers.

// Public API exports
pub use crate::error::{ArchiveStage, Result, StudentFilesError};

// Core types
pub use crate::core::{Clock, RecordSheet, ReportRow, RosterEntry};

// IO types
pub use crate::io::{
    ActivityLog, ArchiveResult, Archiver, Console, DeletionOutcome, DeletionPrompt, FolderStatus,
    LoadOutcome, LogStatus, Prompt, RecordInfo, RecordStore, RecordsFolder, ReportWriter,
    RosterReader, ScriptedPrompt, StdinPrompt, WorkspaceConfig, WriteStatus,
};

// Drivers
pub use crate::report::{generate_report, ReportConfig, ReportStatus};
pub use crate::workflow::{FileWorkflow, WorkflowStatus};

pub mod core;
pub mod error;
pub mod io;
pub mod report;
pub mod workflow;
