//! Query methods for TaskList
//!
//! Read-only views over the collection used by the presentation layer and
//! the smart view.

use super::task::Task;
use super::task_list::TaskList;

/// Overall counts across the whole list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl TaskStats {
    /// Share of completed tasks in percent, `None` when there are no tasks
    pub fn completion_rate(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.completed as f64 / self.total as f64 * 100.0)
    }
}

impl TaskList {
    /// Tasks that are not completed, in insertion order
    pub fn pending(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_pending()).collect()
    }

    /// Completed tasks, in insertion order
    pub fn completed(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.is_completed()).collect()
    }

    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.completed().len();
        TaskStats {
            total,
            completed,
            pending: total - completed,
        }
    }
}
