//! Delete handler for the task store

use crate::TaskManager;
use crate::error::TaskError;
use crate::tasks::Task;
use tracing::info;

impl TaskManager {
    /// Remove a task and persist the list
    ///
    /// Unknown ids are reported as `NotFound`, the same as for complete and
    /// edit, rather than silently ignored.
    pub fn delete(&mut self, id: u32) -> Result<Task, TaskError> {
        self.require(id)?;

        let mut next = self.tasks.clone();
        let removed = next.remove(id).ok_or(TaskError::NotFound(id))?;
        self.commit(next)?;

        info!(task_id = id, "deleted task");
        Ok(removed)
    }
}
