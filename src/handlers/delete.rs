//! Delete handler

use crate::TrackerHandler;
use crate::assignment::{AssignmentId, AssignmentRecord};
use tracing::info;

impl TrackerHandler {
    /// Handles a delete request - removes the assignment if it exists.
    ///
    /// Deleting the assignment currently being edited also resets the form.
    pub fn handle_delete(&mut self, id: AssignmentId) -> Option<AssignmentRecord> {
        let removed = self.store.remove(id);

        if self.edit_target == Some(id) {
            self.handle_reset();
        }

        if removed.is_some() {
            info!(%id, "assignment deleted");
        }
        removed
    }
}
