use crate::error::ValidationError;
use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound};
use std::fmt;
use std::str::FromStr;

/// Format of persisted due dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of persisted `created_at` / `completed_at` timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Get the current local time, truncated to whole seconds
///
/// Timestamps are stored with second precision, so anything finer would be
/// lost on the first save and break round-trips.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// Task priority level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Weight used by the smart view (high 3, medium 2, low 1)
    pub fn weight(self) -> u32 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Lowercase name as stored on disk
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Capitalised name for display ("High", "Medium", "Low")
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ValidationError::InvalidPriority(s.to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task
///
/// Completion is tracked by `completed_at` alone: a task is completed exactly
/// when it carries a completion timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier among the stored tasks
    pub id: u32,
    /// Non-empty, trimmed description
    pub description: String,
    pub priority: Priority,
    /// Optional due date (no time component)
    pub due_date: Option<NaiveDate>,
    /// When the task was created
    pub created_at: NaiveDateTime,
    /// When the task was completed, if it has been
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    /// Create a pending task
    pub fn new(
        id: u32,
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            priority,
            due_date,
            created_at,
            completed_at: None,
        }
    }

    /// Check if this task has been completed
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Check if this task is still pending
    pub fn is_pending(&self) -> bool {
        self.completed_at.is_none()
    }

    /// Mark the task completed at `now`
    ///
    /// Returns `false` and keeps the original timestamp when the task was
    /// already completed.
    pub fn mark_completed(&mut self, now: NaiveDateTime) -> bool {
        if self.is_completed() {
            return false;
        }
        self.completed_at = Some(now);
        true
    }

    /// Pending and due strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.due_date.is_some_and(|due| due < today)
    }

    /// Pending and due exactly on `today`
    pub fn is_due_on(&self, today: NaiveDate) -> bool {
        self.is_pending() && self.due_date == Some(today)
    }
}
