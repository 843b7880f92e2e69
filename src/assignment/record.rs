use crate::classify::parse_date;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format used by the form inputs and in every rendered view
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Identifier of a stored assignment
///
/// Assigned by the [`Store`](super::Store) on creation and never changed or reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentId(pub(crate) u64);

impl AssignmentId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AssignmentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(AssignmentId)
    }
}

/// Raw form payload for creating or replacing an assignment
///
/// Dates are kept as the text the host collected. They are parsed when the
/// record is built; text that is not a date classifies as "no date" but is
/// kept on the record as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentFields {
    pub name: String,
    pub project: String,
    pub due_date: String,
    pub completed_date: String,
    pub blocked: bool,
}

impl AssignmentFields {
    pub fn new(name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: due_date.into(),
            ..Default::default()
        }
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    pub fn with_completed_date(mut self, completed_date: impl Into<String>) -> Self {
        self.completed_date = completed_date.into();
        self
    }

    pub fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }
}

/// A stored assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub id: AssignmentId,
    pub name: String,
    pub project: String,
    pub due_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub blocked: bool,
    /// Due date as typed, kept so text that is not a date survives an edit
    pub due_date_text: String,
    /// Completed date as typed
    pub completed_date_text: String,
}

impl AssignmentRecord {
    /// Build a record from fields that already passed validation
    pub(crate) fn from_fields(id: AssignmentId, fields: &AssignmentFields) -> Self {
        let mut record = Self {
            id,
            name: String::new(),
            project: String::new(),
            due_date: None,
            completed_date: None,
            blocked: false,
            due_date_text: String::new(),
            completed_date_text: String::new(),
        };
        record.replace_fields(fields);
        record
    }

    /// Replace every mutable field; `id` is left alone
    pub(crate) fn replace_fields(&mut self, fields: &AssignmentFields) {
        self.name = fields.name.trim().to_string();
        self.project = fields.project.trim().to_string();
        self.due_date = parse_date(&fields.due_date);
        self.completed_date = parse_date(&fields.completed_date);
        self.blocked = fields.blocked;
        self.due_date_text = fields.due_date.trim().to_string();
        self.completed_date_text = fields.completed_date.trim().to_string();
    }

    /// Fields for pre-filling an edit form
    pub fn fields(&self) -> AssignmentFields {
        AssignmentFields {
            name: self.name.clone(),
            project: self.project.clone(),
            due_date: format_date(self.due_date, &self.due_date_text, ""),
            completed_date: format_date(self.completed_date, &self.completed_date_text, ""),
            blocked: self.blocked,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_date.is_some()
    }
}

/// Render a record date for display or for an edit form
///
/// # Arguments
/// * `date` - The parsed date, if the text was a date
/// * `text` - The text as it was typed
/// * `empty` - What to show when nothing was typed at all
///
/// # Returns
/// The date as `YYYY-MM-DD`, otherwise the typed text, otherwise `empty`
pub fn format_date(date: Option<NaiveDate>, text: &str, empty: &str) -> String {
    match date {
        Some(d) => d.format(DATE_FORMAT).to_string(),
        None if !text.is_empty() => text.to_string(),
        None => empty.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_parse_accepts_hash_prefix() {
        assert_eq!("#7".parse::<AssignmentId>().unwrap(), AssignmentId(7));
        assert_eq!(" 12 ".parse::<AssignmentId>().unwrap(), AssignmentId(12));
        assert!("abc".parse::<AssignmentId>().is_err());
    }

    #[test]
    fn test_from_fields_trims_and_parses() {
        let fields = AssignmentFields::new("  Essay ", "2024-01-10")
            .with_project(" English ")
            .with_completed_date("not a date");
        let record = AssignmentRecord::from_fields(AssignmentId(1), &fields);

        assert_eq!(record.name, "Essay");
        assert_eq!(record.project, "English");
        assert_eq!(record.due_date, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(record.completed_date, None);
        assert!(!record.is_completed());
    }

    #[test]
    fn test_fields_renders_dates_for_the_form() {
        let fields = AssignmentFields::new("Lab report", "2024-03-01T09:30")
            .with_completed_date("2024-02-28")
            .with_blocked(true);
        let record = AssignmentRecord::from_fields(AssignmentId(3), &fields);
        let prefill = record.fields();

        assert_eq!(prefill.name, "Lab report");
        assert_eq!(prefill.due_date, "2024-03-01");
        assert_eq!(prefill.completed_date, "2024-02-28");
        assert!(prefill.blocked);
    }

    #[test]
    fn test_fields_keeps_text_that_is_not_a_date() {
        let fields = AssignmentFields::new("Essay", " end of term ");
        let record = AssignmentRecord::from_fields(AssignmentId(4), &fields);

        assert_eq!(record.due_date, None);
        assert_eq!(record.due_date_text, "end of term");
        assert_eq!(record.fields().due_date, "end of term");
        assert_eq!(record.fields().completed_date, "");
    }

    #[test]
    fn test_format_date_placeholder() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10);
        assert_eq!(format_date(date, "2024-01-10T08:00", "-"), "2024-01-10");
        assert_eq!(format_date(None, "soon", "-"), "soon");
        assert_eq!(format_date(None, "", "-"), "-");
    }
}
