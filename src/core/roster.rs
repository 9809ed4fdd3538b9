//! Roster entries and derived report rows
//!
//! Roster entries are deserialized from the JSON input as loosely as the
//! file allows: `id` and `name` accept any JSON value and are rendered as
//! text without validation, `scores` may be missing or `null`.

use serde::Deserialize;
use serde_json::Value;
use std::cmp::Ordering;

/// One student as loaded from the roster file
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct RosterEntry {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub scores: Option<Vec<f64>>,
}

/// Derived id/name/average triple destined for the CSV report
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub id: String,
    pub name: String,
    pub average: f64,
}

impl RosterEntry {
    /// Mean of the scores rounded to two decimals, `0.0` without scores
    pub fn average(&self) -> f64 {
        match self.scores.as_deref() {
            Some(scores) if !scores.is_empty() => {
                let mean = scores.iter().sum::<f64>() / scores.len() as f64;
                round_to_cents(mean)
            }
            _ => 0.0,
        }
    }

    /// Report row for this entry
    pub fn to_row(&self) -> ReportRow {
        ReportRow {
            id: render_scalar(self.id.as_ref()),
            name: render_scalar(self.name.as_ref()),
            average: self.average(),
        }
    }
}

impl ReportRow {
    /// Average as written to the report; always carries a decimal point
    pub fn formatted_average(&self) -> String {
        format_average(self.average)
    }
}

/// One row per entry, in input order
pub fn compute_report_rows(entries: &[RosterEntry]) -> Vec<ReportRow> {
    entries.iter().map(RosterEntry::to_row).collect()
}

/// Stable sort by average, highest first; ties keep their relative order
pub fn sort_by_average_desc(rows: &mut [ReportRow]) {
    rows.sort_by(|a, b| {
        b.average
            .partial_cmp(&a.average)
            .unwrap_or(Ordering::Equal)
    });
}

/// Render a loosely typed JSON field as CSV text
pub fn render_scalar(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// `85` → `85.0`, `86.666…` (already rounded) → `86.67`
pub fn format_average(average: f64) -> String {
    if average.fract() == 0.0 {
        format!("{:.1}", average)
    } else {
        average.to_string()
    }
}

/// Exact halves go to the even cent: `85.125` → `85.12`, `85.375` → `85.38`
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(value: Value) -> Vec<RosterEntry> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_average_of_scores() {
        let roster = entries(json!([
            {"id": 1, "name": "A", "scores": [80, 90]},
            {"id": 2, "name": "B", "scores": []}
        ]));
        let rows = compute_report_rows(&roster);

        assert_eq!(rows[0].average, 85.0);
        assert_eq!(rows[1].average, 0.0);
        assert_eq!(rows[0].formatted_average(), "85.0");
        assert_eq!(rows[1].formatted_average(), "0.0");
    }

    #[test]
    fn test_average_rounds_to_two_decimals() {
        let roster = entries(json!([{"id": "s1", "name": "C", "scores": [90, 85, 85]}]));
        let row = &compute_report_rows(&roster)[0];

        assert_eq!(row.average, 86.67);
        assert_eq!(row.formatted_average(), "86.67");
    }

    #[test]
    fn test_average_half_cent_rounds_to_even() {
        let roster = entries(json!([
            {"id": 1, "name": "D", "scores": [85, 85, 85, 85, 85, 85, 85, 86]},
            {"id": 2, "name": "E", "scores": [85, 85, 85, 85, 85, 85, 85, 88]}
        ]));
        let rows = compute_report_rows(&roster);

        // 85.125 and 85.375 are exact in binary
        assert_eq!(rows[0].average, 85.12);
        assert_eq!(rows[0].formatted_average(), "85.12");
        assert_eq!(rows[1].average, 85.38);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let roster = entries(json!([{}, {"scores": null}]));
        let rows = compute_report_rows(&roster);

        assert_eq!(rows.len(), 2);
        for row in rows {
            assert_eq!(row.id, "");
            assert_eq!(row.name, "");
            assert_eq!(row.average, 0.0);
        }
    }

    #[test]
    fn test_ids_pass_through() {
        assert_eq!(render_scalar(Some(&json!(7))), "7");
        assert_eq!(render_scalar(Some(&json!(2.5))), "2.5");
        assert_eq!(render_scalar(Some(&json!("S-01"))), "S-01");
        assert_eq!(render_scalar(Some(&json!(true))), "true");
        assert_eq!(render_scalar(Some(&json!(null))), "");
        assert_eq!(render_scalar(Some(&json!([1, 2]))), "[1,2]");
        assert_eq!(render_scalar(None), "");
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let roster = entries(json!([
            {"id": 1, "name": "low", "scores": [50]},
            {"id": 2, "name": "tie-first", "scores": [70]},
            {"id": 3, "name": "high", "scores": [99]},
            {"id": 4, "name": "tie-second", "scores": [60, 80]}
        ]));
        let mut rows = compute_report_rows(&roster);
        sort_by_average_desc(&mut rows);

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high", "tie-first", "tie-second", "low"]);
    }
}
