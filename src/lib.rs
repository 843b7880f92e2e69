//! Assignment Tracker Library
//!
//! An in-memory list manager for assignments. Each assignment is classified by
//! its due date as on track, late or blocked, and, once a completed date is
//! recorded, by whether it was finished on time.
//!
//! # Architecture
//!
//! - **Classifier**: `classify` module - pure functions from a record and
//!   "today" to a status and a summary message
//! - **Store**: `assignment` module - the owned record collection and the
//!   active filter
//! - **Host layer**: `TrackerHandler` - turns user intents (submit, edit,
//!   delete, filter change) into store operations and tracks the edit target
//!
//! # Example
//!
//! ```
//! use assignment_tracker::{AssignmentFields, Filter, Status, TrackerHandler};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
//! let mut tracker = TrackerHandler::new();
//! tracker
//!     .handle_submit(AssignmentFields::new("Essay", "2024-01-10"))
//!     .unwrap();
//! tracker.handle_filter_change(Filter::Late);
//!
//! let rows = tracker.rows(today);
//! assert_eq!(rows[0].status, Status::Late);
//! assert_eq!(rows[0].summary, "2 day(s) overdue");
//! ```

pub mod assignment;
pub mod classify;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod intent;
pub mod logging;
pub mod validation;

use chrono::NaiveDate;

// Re-export commonly used types
pub use assignment::{
    AssignmentFields, AssignmentId, AssignmentRecord, Filter, Store, VisibleRecords,
};
pub use classify::{Classification, Status, Summary, SummaryStyle, classify};
pub use error::TrackerError;
pub use formatting::AssignmentRow;
pub use handlers::submit::SubmitOutcome;
pub use intent::{Command, Intent};

/// Host-facing tracker state
///
/// Owns the [`Store`] and remembers which assignment, if any, the form is
/// currently editing.
#[derive(Debug, Default)]
pub struct TrackerHandler {
    pub(crate) store: Store,
    pub(crate) edit_target: Option<AssignmentId>,
}

impl TrackerHandler {
    /// Create a new tracker with an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker around an existing store
    pub fn with_store(store: Store) -> Self {
        Self {
            store,
            edit_target: None,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The assignment the next submit will replace, if any
    pub fn edit_target(&self) -> Option<AssignmentId> {
        self.edit_target
    }

    /// Rows for the currently visible assignments
    pub fn rows(&self, today: NaiveDate) -> Vec<AssignmentRow> {
        formatting::rows(&self.store, today)
    }

    /// Apply one intent and describe the result for display
    ///
    /// Only validation failures and unknown edit targets are returned as
    /// errors; deleting an unknown assignment is silently ignored.
    pub fn dispatch(&mut self, intent: Intent) -> Result<String, TrackerError> {
        match intent {
            Intent::Submit(fields) => Ok(match self.handle_submit(fields)? {
                SubmitOutcome::Added(id) => format!("Assignment added with ID: {}", id),
                SubmitOutcome::Updated(id) => format!("Assignment {} updated", id),
                SubmitOutcome::Vanished(id) => {
                    format!("Assignment {} no longer exists, nothing saved", id)
                }
            }),
            Intent::EditRequest(id) => {
                let fields = self.handle_edit_request(id)?;
                Ok(format!(
                    "Editing assignment {}: {} | {} | {} | {} | {}",
                    id,
                    fields.name,
                    fields.project,
                    fields.due_date,
                    fields.completed_date,
                    if fields.blocked { "yes" } else { "no" }
                ))
            }
            Intent::Delete(id) => Ok(match self.handle_delete(id) {
                Some(record) => format!("Deleted assignment {} ({})", id, record.name),
                None => format!("No assignment {}", id),
            }),
            Intent::FilterChange(filter) => {
                self.handle_filter_change(filter);
                Ok(format!("Showing: {}", filter))
            }
            Intent::Reset => {
                self.handle_reset();
                Ok("Form reset".to_string())
            }
        }
    }
}
