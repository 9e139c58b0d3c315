//! Smart view ranking
//!
//! Ranks pending tasks by an urgency score built from three weights:
//! - priority (50%): high 3, medium 2, low 1
//! - due date (25%): overdue 3, due today 2, due later 1, no due date 0
//! - freshness (25%): 1 if created today, else 0
//!
//! The score is `0.5 * priority + 0.25 * due + 0.25 * freshness`. It is kept
//! internally as a whole number of quarter points so ordering is exact.
//! Sorting is stable: tasks with equal scores keep their insertion order.

use crate::tasks::{Task, TaskList};
use chrono::NaiveDate;
use std::cmp::Reverse;

/// The three weights behind a task's urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyScore {
    pub priority_weight: u32,
    pub due_weight: u32,
    pub creation_weight: u32,
}

impl UrgencyScore {
    /// Compute the score of `task` as seen on `today`
    pub fn for_task(task: &Task, today: NaiveDate) -> Self {
        let due_weight = match task.due_date {
            Some(due) if due < today => 3,
            Some(due) if due == today => 2,
            Some(_) => 1,
            None => 0,
        };
        let creation_weight = u32::from(task.created_at.date() == today);

        Self {
            priority_weight: task.priority.weight(),
            due_weight,
            creation_weight,
        }
    }

    /// Score in quarter points (`2 * priority + due + creation`)
    pub fn quarters(&self) -> u32 {
        2 * self.priority_weight + self.due_weight + self.creation_weight
    }

    /// Weighted score
    pub fn total(&self) -> f64 {
        f64::from(self.quarters()) / 4.0
    }
}

/// A pending task with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedTask<'a> {
    pub task: &'a Task,
    pub score: UrgencyScore,
}

/// Counters shown alongside the smart view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Summary {
    /// Nothing is pending; shown instead of zero counters
    NoPendingTasks,
    Pending {
        total: usize,
        overdue: usize,
        due_today: usize,
    },
}

/// Pending tasks ordered by urgency, plus summary counters
#[derive(Debug, Clone, PartialEq)]
pub struct SmartView<'a> {
    pub ranked: Vec<RankedTask<'a>>,
    pub summary: Summary,
}

impl SmartView<'_> {
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Rank the pending tasks of `tasks` as seen on `today`
pub fn rank(tasks: &TaskList, today: NaiveDate) -> SmartView<'_> {
    let mut ranked: Vec<RankedTask<'_>> = tasks
        .pending()
        .into_iter()
        .map(|task| RankedTask {
            task,
            score: UrgencyScore::for_task(task, today),
        })
        .collect();

    if ranked.is_empty() {
        return SmartView {
            ranked,
            summary: Summary::NoPendingTasks,
        };
    }

    // sort_by_key is stable, so equal scores stay in insertion order
    ranked.sort_by_key(|r| Reverse(r.score.quarters()));

    let overdue = ranked.iter().filter(|r| r.task.is_overdue(today)).count();
    let due_today = ranked.iter().filter(|r| r.task.is_due_on(today)).count();

    SmartView {
        summary: Summary::Pending {
            total: ranked.len(),
            overdue,
            due_today,
        },
        ranked,
    }
}
