//! Core types with no file system access
//!
//! - Clock: where timestamps and record dates come from
//! - RecordSheet: the names written to one record file
//! - RosterEntry / ReportRow: roster input and derived averages

pub mod clock;
pub mod record;
pub mod roster;

pub use clock::{Clock, TIMESTAMP_FORMAT};
pub use record::RecordSheet;
pub use roster::{
    compute_report_rows, format_average, render_scalar, sort_by_average_desc, ReportRow,
    RosterEntry,
};
