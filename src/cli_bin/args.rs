//! Command-line argument definitions and parsing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use studentfiles::{ReportConfig, WorkspaceConfig};

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "studentfiles",
    version,
    about = "Manage student record files and generate score reports",
    long_about = "studentfiles runs two independent tools: an interactive workflow that \
                  creates, archives and optionally deletes dated student record files, \
                  and a report generator that turns a JSON roster into a CSV of score \
                  averages."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create, inspect, archive and optionally delete student record files
    Files(FilesArgs),
    /// Compute score averages from a JSON roster and write a CSV report
    Report(ReportArgs),
}

/// Arguments for the files command
#[derive(Args, Debug)]
pub struct FilesArgs {
    /// Records folder
    #[arg(long, value_name = "DIR", default_value = "StudentFiles")]
    pub dir: PathBuf,

    /// Activity log file name inside the records folder
    #[arg(long, value_name = "NAME", default_value = "activity_log.txt")]
    pub log_file: String,

    /// Archive sub-folder name inside the records folder
    #[arg(long, value_name = "NAME", default_value = "Archive")]
    pub archive_dir: String,

    /// Number of student names asked for
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub names: usize,
}

impl FilesArgs {
    pub fn to_config(&self) -> WorkspaceConfig {
        WorkspaceConfig {
            records_dir: self.dir.clone(),
            log_file_name: self.log_file.clone(),
            archive_dir_name: self.archive_dir.clone(),
            names_per_record: self.names,
            ..Default::default()
        }
    }
}

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Roster JSON file
    #[arg(long, value_name = "FILE", default_value = "students.json")]
    pub input: PathBuf,

    /// CSV report file
    #[arg(long, value_name = "FILE", default_value = "report.csv")]
    pub output: PathBuf,
}

impl ReportArgs {
    pub fn to_config(&self) -> ReportConfig {
        ReportConfig {
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }
}
