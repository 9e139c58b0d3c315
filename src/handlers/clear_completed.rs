//! Clear completed handler for the task store

use crate::TaskManager;
use crate::error::TaskError;
use tracing::info;

impl TaskManager {
    /// Removes every completed task and returns how many were removed.
    pub fn clear_completed(&mut self) -> Result<usize, TaskError> {
        let mut next = self.tasks.clone();
        let removed = next.remove_completed();
        if removed == 0 {
            return Ok(0);
        }
        self.commit(next)?;

        info!(removed, "cleared completed tasks");
        Ok(removed)
    }
}
