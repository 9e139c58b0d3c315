//! Read-only views for the presentation layer

use crate::TaskManager;
use crate::ranking::{self, SmartView};
use crate::tasks::{Task, TaskStats};
use chrono::NaiveDate;

impl TaskManager {
    /// All tasks, unfiltered, in insertion order
    pub fn list_all(&self) -> &[Task] {
        self.tasks.tasks()
    }

    /// Pending tasks ranked by urgency as of `today`, with summary counters
    pub fn smart_view(&self, today: NaiveDate) -> SmartView<'_> {
        ranking::rank(&self.tasks, today)
    }

    pub fn stats(&self) -> TaskStats {
        self.tasks.stats()
    }
}
