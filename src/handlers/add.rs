//! Add handler for the task store

use crate::TaskManager;
use crate::error::TaskError;
use crate::tasks::{Priority, Task, local_now};
use crate::validation;
use tracing::info;

impl TaskManager {
    /// Create a new pending task and persist it
    ///
    /// # Arguments
    /// * `description` - Task text; surrounding whitespace is trimmed
    /// * `priority` - Priority level
    /// * `due_date` - `YYYY-MM-DD`, or an empty string for no due date
    ///
    /// # Returns
    /// The created task, or `ValidationError` for an empty description or a
    /// malformed due date (the list is left unchanged)
    pub fn add(
        &mut self,
        description: &str,
        priority: Priority,
        due_date: &str,
    ) -> Result<Task, TaskError> {
        let description = validation::validate_description(description)?;
        let due_date = validation::parse_due_date(due_date)?;

        let task = Task::new(
            self.tasks.next_id(),
            description,
            priority,
            due_date,
            local_now(),
        );

        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;

        info!(task_id = task.id, priority = %task.priority, "added task");
        Ok(task)
    }
}
