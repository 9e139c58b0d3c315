//! Smart Tasks Library
//!
//! This library provides a small single-user task manager: tasks with a
//! description, priority and optional due date, kept in a local file, plus a
//! "smart view" that ranks pending tasks by urgency.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Store Layer**: `TaskManager` - validates input, applies mutations and persists them
//! - **Domain Layer**: `tasks` and `ranking` modules - task model, queries and urgency ranking
//! - **Persistence Layer**: `storage` module - TOML or JSON file storage with atomic writes
//!
//! # Example
//!
//! ```no_run
//! use smart_tasks::{Priority, TaskManager, local_date_today};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut manager = TaskManager::new("tasks.toml")?;
//!     let task = manager.add("Renew passport", Priority::High, "2025-09-01")?;
//!     manager.complete(task.id)?;
//!     let view = manager.smart_view(local_date_today());
//!     println!("{} pending", view.ranked.len());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatting;
mod handlers;
pub mod ranking;
pub mod storage;
pub mod tasks;
pub mod validation;

use std::path::Path;
use tracing::debug;

// Re-export commonly used types
pub use error::{TaskError, ValidationError};
pub use ranking::{RankedTask, SmartView, Summary, UrgencyScore};
pub use storage::{StoreFormat, Storage};
pub use tasks::{Priority, Task, TaskList, TaskStats, local_date_today, local_now};

/// Task store for a single user
///
/// Owns the in-memory task list and the storage it came from. Every mutating
/// operation validates its input first, applies the change to a copy of the
/// list, writes that copy, and only then replaces the in-memory list. A
/// failed operation therefore never leaves a partial change behind, in
/// memory or on disk.
pub struct TaskManager {
    pub(crate) tasks: TaskList,
    pub(crate) storage: Storage,
}

impl TaskManager {
    /// Open the task store at `storage_path`
    ///
    /// # Arguments
    /// * `storage_path` - Path to the task file (`.json` for JSON, TOML otherwise)
    ///
    /// # Returns
    /// Result containing the manager or an error
    ///
    /// # Example
    /// ```no_run
    /// # use smart_tasks::TaskManager;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let manager = TaskManager::new("tasks.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: impl AsRef<Path>) -> Result<Self, TaskError> {
        Self::with_storage(Storage::new(storage_path))
    }

    /// Open a manager over an existing storage, loading its tasks
    pub fn with_storage(storage: Storage) -> Result<Self, TaskError> {
        let tasks = storage.load()?;
        Ok(Self { tasks, storage })
    }

    /// The current task list
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Write the current list to storage
    pub fn save(&self) -> Result<(), TaskError> {
        self.storage.save(&self.tasks)?;
        Ok(())
    }

    /// Replace the in-memory list with what is on disk
    pub fn reload(&mut self) -> Result<(), TaskError> {
        self.tasks = self.storage.load()?;
        Ok(())
    }

    /// Persist `next` and make it the current list
    fn commit(&mut self, next: TaskList) -> Result<(), TaskError> {
        self.storage.save(&next)?;
        debug!(count = next.len(), "committed task list");
        self.tasks = next;
        Ok(())
    }

    /// Look up a task, reporting unknown ids as `NotFound`
    fn require(&self, id: u32) -> Result<&Task, TaskError> {
        self.tasks.find_by_id(id).ok_or(TaskError::NotFound(id))
    }
}
