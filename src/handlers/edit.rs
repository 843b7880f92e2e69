//! Edit-request and form reset handlers

use crate::TrackerHandler;
use crate::assignment::{AssignmentFields, AssignmentId};
use crate::error::{Result, TrackerError};
use tracing::info;

impl TrackerHandler {
    /// Handles an edit request - selects the assignment as the edit target and
    /// returns its fields so the host can pre-fill the form.
    ///
    /// An unknown ID leaves the current edit target as it was.
    pub fn handle_edit_request(&mut self, id: AssignmentId) -> Result<AssignmentFields> {
        let fields = self
            .store
            .get(id)
            .map(|record| record.fields())
            .ok_or(TrackerError::NotFound(id))?;

        info!(%id, "editing assignment");
        self.edit_target = Some(id);
        Ok(fields)
    }

    /// Handles a form reset - drops the edit target so the next submit adds.
    pub fn handle_reset(&mut self) {
        if let Some(id) = self.edit_target.take() {
            info!(%id, "edit cancelled");
        }
    }
}
