//! Student record sheets
//!
//! A record sheet is the in-memory form of one `records_<date>.txt` file:
//! an ordered list of student names, one per line.

use chrono::NaiveDate;

/// Prefix shared by every record file name
pub const RECORD_FILE_PREFIX: &str = "records_";

/// Extension of record files
pub const RECORD_FILE_EXTENSION: &str = "txt";

/// Ordered student names destined for a single record file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordSheet {
    names: Vec<String>,
}

impl RecordSheet {
    /// Create a sheet from raw answers; surrounding whitespace is dropped,
    /// blank answers are kept as empty names
    pub fn from_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: answers
                .into_iter()
                .map(|answer| answer.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Names in entry order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names on the sheet
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the sheet holds no names at all
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// File content: every name followed by a newline
    pub fn render(&self) -> String {
        let mut content = String::new();
        for name in &self.names {
            content.push_str(name);
            content.push('\n');
        }
        content
    }

    /// File name for a sheet created on `date`
    pub fn file_name_for(date: NaiveDate) -> String {
        format!(
            "{}{}.{}",
            RECORD_FILE_PREFIX,
            date.format("%Y-%m-%d"),
            RECORD_FILE_EXTENSION
        )
    }
}
