//! Complete handler for the task store

use crate::TaskManager;
use crate::error::TaskError;
use crate::tasks::{Task, local_now};
use tracing::{debug, info};

impl TaskManager {
    /// Mark a task completed and persist it
    ///
    /// Completing an already completed task changes nothing: the original
    /// `completed_at` is kept and the store is not rewritten.
    ///
    /// # Returns
    /// The task after the change, or `NotFound` for an unknown id
    pub fn complete(&mut self, id: u32) -> Result<Task, TaskError> {
        if self.require(id)?.is_completed() {
            debug!(task_id = id, "task already completed");
            return self.require(id).cloned();
        }

        let mut next = self.tasks.clone();
        let task = next.find_by_id_mut(id).ok_or(TaskError::NotFound(id))?;
        task.mark_completed(local_now());
        let completed = task.clone();
        self.commit(next)?;

        info!(task_id = id, "completed task");
        Ok(completed)
    }
}
