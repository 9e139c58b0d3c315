//! Edit handler for the task store

use crate::TaskManager;
use crate::error::TaskError;
use crate::tasks::{Priority, Task};
use crate::validation;
use tracing::info;

impl TaskManager {
    /// Update the given fields of a task
    ///
    /// Fields passed as `None` are left alone. For `due_date`, an empty
    /// string clears it. All input is validated before anything changes, so
    /// a rejected edit leaves the task exactly as it was.
    ///
    /// # Arguments
    /// * `id` - Task to edit
    /// * `description` - New description (must not be blank)
    /// * `priority` - New priority
    /// * `due_date` - New due date as `YYYY-MM-DD`, or `""` to clear
    pub fn edit(
        &mut self,
        id: u32,
        description: Option<&str>,
        priority: Option<Priority>,
        due_date: Option<&str>,
    ) -> Result<Task, TaskError> {
        self.require(id)?;

        let description = description
            .map(validation::validate_description)
            .transpose()?;
        let due_date = due_date.map(validation::parse_due_date).transpose()?;

        let mut next = self.tasks.clone();
        let task = next.find_by_id_mut(id).ok_or(TaskError::NotFound(id))?;
        if let Some(description) = description {
            task.description = description;
        }
        if let Some(priority) = priority {
            task.priority = priority;
        }
        if let Some(due_date) = due_date {
            task.due_date = due_date;
        }
        let edited = task.clone();
        self.commit(next)?;

        info!(task_id = id, "edited task");
        Ok(edited)
    }
}
