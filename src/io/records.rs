//! Creating and inspecting record files

use crate::core::{Clock, RecordSheet, TIMESTAMP_FORMAT};
use crate::error::{Result, StudentFilesError};
use crate::io::activity_log::ActivityLog;
use crate::io::console::Console;
use crate::io::fs::{read_to_string, write_atomic};
use crate::io::prompt::Prompt;
use crate::io::workspace::WorkspaceConfig;
use chrono::{DateTime, Local, NaiveDateTime};
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Contents and metadata of a record file
#[derive(Debug, Clone, PartialEq)]
pub struct RecordInfo {
    pub path: PathBuf,
    pub contents: String,
    /// Size in bytes
    pub size: u64,
    /// Last modification, local time
    pub modified: NaiveDateTime,
}

impl RecordInfo {
    /// Modification time as `YYYY-MM-DD HH:MM:SS`
    pub fn modified_display(&self) -> String {
        self.modified.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Record files of one workspace
pub struct RecordStore<'a> {
    config: &'a WorkspaceConfig,
    log: &'a ActivityLog,
    clock: Clock,
}

impl<'a> RecordStore<'a> {
    pub fn new(config: &'a WorkspaceConfig, log: &'a ActivityLog, clock: Clock) -> Self {
        Self { config, log, clock }
    }

    /// File name a record created now would get
    pub fn todays_file_name(&self) -> String {
        RecordSheet::file_name_for(self.clock.today())
    }

    /// Ask for the student names and write them to today's record file
    ///
    /// Returns the file name (not the path) of the record.
    pub fn create(&self, prompt: &mut dyn Prompt, console: &mut Console<'_>) -> Result<String> {
        let file_name = self.todays_file_name();

        match self.collect_and_write(&file_name, prompt, console) {
            Ok(path) => {
                info!("wrote record {}", path.display());
                console.say(format!(
                    "Success: {} created at {}",
                    file_name,
                    self.clock.timestamp()
                ));
                Ok(file_name)
            }
            Err(e) => {
                warn!("record creation failed: {}", e);
                console.error(format!("Error creating/writing file: {}", e));
                self.log.append(
                    &format!("ERROR: Failed to create/write {}: {}", file_name, e),
                    console,
                );
                Err(e)
            }
        }
    }

    fn collect_and_write(
        &self,
        file_name: &str,
        prompt: &mut dyn Prompt,
        console: &mut Console<'_>,
    ) -> Result<PathBuf> {
        let count = self.config.names_per_record;
        console.say(format!(
            "Enter {} student names. Press Enter after each name.",
            count
        ));
        console.flush();

        let mut answers = Vec::with_capacity(count);
        for i in 1..=count {
            let answer = prompt
                .ask(&format!("Student {} name: ", i))
                .map_err(StudentFilesError::prompt)?;
            answers.push(answer);
        }

        let sheet = RecordSheet::from_answers(answers);
        let path = self.config.path_of(file_name);
        write_atomic(&path, &sheet.render())
            .map_err(|e| StudentFilesError::record_write(file_name, e))?;
        Ok(path)
    }

    /// Print a record's contents, size and modification time
    pub fn inspect(&self, file_name: &str, console: &mut Console<'_>) -> Result<RecordInfo> {
        console.say("\n--- File contents ---");
        match self.read_info(file_name) {
            Ok(info) => {
                debug!("inspected {} ({} bytes)", info.path.display(), info.size);
                console.say(info.contents.trim_end_matches('\n'));
                console.say(format!("Size: {} bytes", info.size));
                console.say(format!("Last modified: {}", info.modified_display()));
                Ok(info)
            }
            Err(e) => {
                warn!("cannot inspect {}: {}", file_name, e);
                console.error(format!("Error reading file/info: {}", e));
                self.log.append(
                    &format!("ERROR: Failed to read {}: {}", file_name, e),
                    console,
                );
                Err(e)
            }
        }
    }

    /// Contents and metadata without any console output
    pub fn read_info(&self, file_name: &str) -> Result<RecordInfo> {
        let path = self.config.path_of(file_name);
        let wrap = |e: io::Error| StudentFilesError::record_read(file_name, e);

        let contents = read_to_string(&path).map_err(wrap)?;
        let metadata = fs::metadata(&path).map_err(wrap)?;
        let modified: DateTime<Local> = metadata.modified().map_err(wrap)?.into();

        Ok(RecordInfo {
            path,
            contents,
            size: metadata.len(),
            modified: modified.naive_local(),
        })
    }
}
