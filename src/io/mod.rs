//! File system and terminal I/O
//!
//! Every step of the file workflow and the report generator that touches
//! the disk or the user lives here. Steps whose failures must not escalate
//! return status values (`LogStatus`, `DeletionOutcome`, `LoadOutcome`,
//! `WriteStatus`); the others return [`crate::Result`].

pub mod activity_log;
pub mod archive;
pub mod console;
pub mod deletion;
pub mod fs;
pub mod prompt;
pub mod records;
pub mod report_writer;
pub mod roster_reader;
pub mod workspace;

pub use activity_log::{ActivityLog, LogStatus};
pub use archive::{ArchiveResult, Archiver};
pub use console::Console;
pub use deletion::{DeletionOutcome, DeletionPrompt};
pub use fs::{list_entry_names, write_atomic};
pub use prompt::{Prompt, ScriptedPrompt, StdinPrompt};
pub use records::{RecordInfo, RecordStore};
pub use report_writer::{ReportWriter, WriteStatus, REPORT_HEADER};
pub use roster_reader::{LoadOutcome, RosterReader};
pub use workspace::{FolderStatus, RecordsFolder, WorkspaceConfig};
