//! Status and summary classification
//!
//! Pure functions mapping an [`AssignmentRecord`] and "today" to a status
//! category and a human-readable timeliness message. The current date is always
//! passed in; nothing here reads the clock.

use crate::assignment::AssignmentRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const DATE_TIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Coarse status category, shown as the colored indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Blocked,
    Late,
    OnTrack,
}

impl Status {
    /// Style tag for the status indicator
    pub fn css_class(self) -> &'static str {
        match self {
            Status::Blocked => "blocked",
            Status::Late => "late",
            Status::OnTrack => "meet",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Blocked => "Blocked",
            Status::Late => "Late",
            Status::OnTrack => "On Track",
        };
        f.write_str(label)
    }
}

/// Presentation hint attached to a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    OnTime,
    Late,
    Upcoming,
    Overdue,
}

impl SummaryStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            SummaryStyle::OnTime => "summary-on-time",
            SummaryStyle::Late => "summary-late",
            SummaryStyle::Upcoming => "summary-upcoming",
            SummaryStyle::Overdue => "summary-overdue",
        }
    }
}

/// Fine-grained timeliness message, e.g. "3 day(s) overdue"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub text: String,
    pub style: Option<SummaryStyle>,
}

impl Summary {
    fn new(text: impl Into<String>, style: SummaryStyle) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub status: Status,
    pub summary: Summary,
}

/// Parse a date as entered in a form field
///
/// Accepts `YYYY-MM-DD`, or a date-time whose time of day is dropped so that
/// two values captured on the same day always compare equal. Date-times may
/// carry fractional seconds and an RFC 3339 offset (`Z`, `+02:00`); the
/// calendar day is the one written in the text.
///
/// # Arguments
/// * `value` - Date text, e.g. "2024-01-10" or "2024-01-10T10:00:00Z"
///
/// # Returns
/// The calendar day, or `None` for blank or unparseable text
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Whole calendar days from `from` to `to` (negative when `to` is earlier)
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Classify a record against `today`
///
/// # Arguments
/// * `record` - The assignment to classify
/// * `today` - The current calendar day, supplied by the caller
///
/// # Returns
/// The status category together with the summary message
pub fn classify(record: &AssignmentRecord, today: NaiveDate) -> Classification {
    Classification {
        status: status_of(record, today),
        summary: summary_of(record, today),
    }
}

/// Determine the status category; the first matching rule wins
pub fn status_of(record: &AssignmentRecord, today: NaiveDate) -> Status {
    if record.blocked {
        return Status::Blocked;
    }

    let Some(due) = record.due_date else {
        return Status::OnTrack;
    };

    match record.completed_date {
        Some(completed) if completed <= due => Status::OnTrack,
        Some(_) => Status::Late,
        None if due < today => Status::Late,
        None => Status::OnTrack,
    }
}

/// Build the summary message
///
/// A record without a due date has an empty summary, even when blocked.
pub fn summary_of(record: &AssignmentRecord, today: NaiveDate) -> Summary {
    let Some(due) = record.due_date else {
        return Summary::default();
    };

    if record.blocked {
        return Summary::new("Blocked", SummaryStyle::Overdue);
    }

    if let Some(completed) = record.completed_date {
        let diff_days = days_between(due, completed);
        return match diff_days {
            d if d < 0 => Summary::new(
                format!("Completed {} day(s) early", d.abs()),
                SummaryStyle::OnTime,
            ),
            0 => Summary::new("Completed on due date", SummaryStyle::OnTime),
            d => Summary::new(format!("Completed {} day(s) late", d), SummaryStyle::Late),
        };
    }

    let diff_days = days_between(today, due);
    match diff_days {
        d if d > 0 => Summary::new(format!("{} day(s) left", d), SummaryStyle::Upcoming),
        0 => Summary::new("Due today", SummaryStyle::Overdue),
        d => Summary::new(format!("{} day(s) overdue", d.abs()), SummaryStyle::Overdue),
    }
}

/// Label shown next to the status indicator
///
/// Completed assignments read "Completed Late" / "Completed On Time".
pub fn status_label(record: &AssignmentRecord, status: Status) -> &'static str {
    match status {
        Status::Blocked => "Blocked",
        Status::Late if record.is_completed() => "Completed Late",
        Status::Late => "Late",
        Status::OnTrack if record.is_completed() => "Completed On Time",
        Status::OnTrack => "On Track",
    }
}
