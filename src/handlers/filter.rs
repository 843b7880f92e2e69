//! Filter-change handler

use crate::TrackerHandler;
use crate::assignment::Filter;
use tracing::info;

impl TrackerHandler {
    /// Handles a filter change - switches which assignments the list shows.
    pub fn handle_filter_change(&mut self, filter: Filter) {
        info!(%filter, "filter selected");
        self.store.set_filter(filter);
    }
}
