//! Formatting helper functions
//!
//! Turns the visible assignments into plain row data and renders it for the
//! host, either as a text list or as a TOML document.

use crate::assignment::{AssignmentId, AssignmentRecord, Store, format_date};
use crate::classify::{Status, classify, status_label};
use chrono::NaiveDate;
use serde::Serialize;

/// Placeholder shown for empty cells
pub const EMPTY_CELL: &str = "—";

/// One rendered row of the assignment list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentRow {
    pub id: AssignmentId,
    pub status: Status,
    pub status_label: String,
    pub status_class: String,
    pub name: String,
    pub project: String,
    pub due_date: String,
    pub completed_date: String,
    pub summary: String,
    pub summary_class: String,
}

impl AssignmentRow {
    pub fn new(record: &AssignmentRecord, today: NaiveDate) -> Self {
        let classification = classify(record, today);
        let status = classification.status;

        Self {
            id: record.id,
            status,
            status_label: status_label(record, status).to_string(),
            status_class: status.css_class().to_string(),
            name: record.name.clone(),
            project: cell(&record.project),
            due_date: format_date(record.due_date, &record.due_date_text, EMPTY_CELL),
            completed_date: format_date(
                record.completed_date,
                &record.completed_date_text,
                EMPTY_CELL,
            ),
            summary: classification.summary.text,
            summary_class: classification
                .summary
                .style
                .map(|s| s.css_class().to_string())
                .unwrap_or_default(),
        }
    }
}

fn cell(value: &str) -> String {
    if value.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}

/// Build display rows for the records passing the store's active filter
///
/// # Arguments
/// * `store` - The store to read; its active filter decides which records appear
/// * `today` - The current calendar day used for classification
///
/// # Returns
/// One row per visible record, in insertion order
pub fn rows(store: &Store, today: NaiveDate) -> Vec<AssignmentRow> {
    store
        .visible_records(today)
        .map(|record| AssignmentRow::new(record, today))
        .collect()
}

/// Format rows into a display string
///
/// # Arguments
/// * `rows` - Rows to format
///
/// # Returns
/// Formatted string representation of the rows, or a short notice when empty
pub fn format_rows(rows: &[AssignmentRow]) -> String {
    if rows.is_empty() {
        return "No assignments to show".to_string();
    }

    let mut result = format!("Showing {} assignment(s):\n\n", rows.len());
    for row in rows {
        result.push_str(&format!(
            "- [{}] {} ({})\n",
            row.id, row.name, row.status_label
        ));
        result.push_str(&format!("  Project: {}\n", row.project));
        result.push_str(&format!("  Due: {}\n", row.due_date));
        result.push_str(&format!("  Completed: {}\n", row.completed_date));
        if !row.summary.is_empty() {
            result.push_str(&format!("  Summary: {}\n", row.summary));
        }
    }

    result
}

#[derive(Serialize)]
struct Export<'a> {
    assignment: &'a [AssignmentRow],
}

/// Render rows as a TOML document with one `[[assignment]]` table per row
pub fn export_rows(rows: &[AssignmentRow]) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&Export { assignment: rows })
}
