//! Time source for record names and log timestamps

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Format used for log lines, creation notices and modification times
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where "now" comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Local wall-clock time
    #[default]
    System,
    /// A frozen instant, used by tests
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Current local date and time
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::System => Local::now().naive_local(),
            Self::Fixed(instant) => *instant,
        }
    }

    /// Current local date
    pub fn today(&self) -> NaiveDate {
        self.now().date()
    }

    /// Current time rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}
