//! CLI command handlers that bridge CLI arguments to library operations

use crate::cli_bin::args::{FilesArgs, ReportArgs};
use log::debug;
use std::process::ExitCode;
use studentfiles::{
    generate_report, Console, FileWorkflow, ReportStatus, StdinPrompt, WorkflowStatus,
};

/// Execute the files command
///
/// Exits with a failure status only when the records folder cannot be set
/// up; every later problem has been reported and logged by the workflow.
pub fn files_command(args: FilesArgs) -> ExitCode {
    debug!("Executing files command with args: {:?}", args);

    let workflow = FileWorkflow::new(args.to_config());
    let mut prompt = StdinPrompt::new();
    let mut console = Console::stdio();

    match workflow.run(&mut prompt, &mut console) {
        Ok(WorkflowStatus::Completed { record, .. }) => {
            debug!("workflow completed for {}", record);
            ExitCode::SUCCESS
        }
        Ok(WorkflowStatus::Aborted { reason }) => {
            debug!("workflow aborted: {}", reason);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("workflow failed before it started: {}", e);
            if e.is_fatal() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
    }
}

/// Execute the report command
pub fn report_command(args: ReportArgs) -> ExitCode {
    debug!("Executing report command with args: {:?}", args);

    let mut console = Console::stdio();
    match generate_report(&args.to_config(), &mut console) {
        ReportStatus::Written { path, rows } => {
            debug!("{} rows written to {}", rows, path.display())
        }
        ReportStatus::NoInput => debug!("no roster, no report"),
        ReportStatus::WriteFailed(reason) => debug!("report not written: {}", reason),
    }
    ExitCode::SUCCESS
}
