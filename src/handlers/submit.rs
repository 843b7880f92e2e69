//! Submit handler

use crate::TrackerHandler;
use crate::assignment::{AssignmentFields, AssignmentId};
use crate::error::Result;
use tracing::info;

/// What a successful submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(AssignmentId),
    Updated(AssignmentId),
    /// The assignment being edited was deleted in the meantime
    Vanished(AssignmentId),
}

impl TrackerHandler {
    /// Handles a form submission - adds a new assignment, or replaces the one being edited.
    ///
    /// On success the edit target is cleared, as resetting the form would.
    /// On a validation error nothing changes and the edit target is kept so the
    /// host can leave the form filled in.
    pub fn handle_submit(&mut self, fields: AssignmentFields) -> Result<SubmitOutcome> {
        let outcome = match self.edit_target {
            Some(id) => {
                if self.store.update(id, fields)? {
                    SubmitOutcome::Updated(id)
                } else {
                    SubmitOutcome::Vanished(id)
                }
            }
            None => SubmitOutcome::Added(self.store.add(fields)?),
        };

        info!(?outcome, "submit handled");
        self.edit_target = None;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_for_vanished_edit_target_resets_form() {
        let mut tracker = TrackerHandler::new();
        let id = tracker
            .store
            .add(AssignmentFields::new("Essay", "2024-01-10"))
            .unwrap();
        tracker.handle_edit_request(id).unwrap();
        tracker.store.remove(id);

        let outcome = tracker.handle_submit(AssignmentFields::new("Essay", "2024-01-11"));
        assert_eq!(outcome, Ok(SubmitOutcome::Vanished(id)));
        assert_eq!(tracker.edit_target(), None);
        assert!(tracker.store.is_empty());
    }
}
