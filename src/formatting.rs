//! Formatting helper functions for task output
//!
//! This module turns tasks, smart views and statistics into the text shown
//! by the command-line front end.

use crate::ranking::{SmartView, Summary};
use crate::tasks::{DATE_FORMAT, TIMESTAMP_FORMAT, Task, TaskStats};

/// Due date text, or "-" when none is set
fn due_label(task: &Task) -> String {
    task.due_date
        .map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Format the full task list, one task per line
///
/// # Arguments
/// * `tasks` - Tasks in the order they should be shown
///
/// # Returns
/// Lines of `[id] description | priority | due | created | done`
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks yet".to_string();
    }

    let mut result = String::new();
    for task in tasks {
        result.push_str(&format!(
            "[{}] {} | {} | Due: {} | Created: {} | Completed: {}\n",
            task.id,
            task.description,
            task.priority.label(),
            due_label(task),
            task.created_at.format(TIMESTAMP_FORMAT),
            if task.is_completed() { "Yes" } else { "No" },
        ));
    }
    result
}

/// Format the smart view summary line
pub fn format_summary(summary: &Summary) -> String {
    match summary {
        Summary::NoPendingTasks => "No pending tasks".to_string(),
        Summary::Pending {
            total,
            overdue,
            due_today,
        } => format!(
            "Pending: {} | Overdue: {} | Due today: {}",
            total, overdue, due_today
        ),
    }
}

/// Format the ranked pending tasks followed by the summary line
pub fn format_smart_view(view: &SmartView<'_>) -> String {
    let mut result = String::new();
    for ranked in &view.ranked {
        result.push_str(&format!(
            "{:.2}  [{}] {} | {} | Due: {}\n",
            ranked.score.total(),
            ranked.task.id,
            ranked.task.description,
            ranked.task.priority.label(),
            due_label(ranked.task),
        ));
    }
    result.push_str(&format_summary(&view.summary));
    result
}

/// Format overall statistics
pub fn format_stats(stats: &TaskStats) -> String {
    match stats.completion_rate() {
        None => "No tasks yet".to_string(),
        Some(rate) => format!(
            "Total: {} | Completed: {} | Pending: {} | Completion: {:.1}%",
            stats.total, stats.completed, stats.pending, rate
        ),
    }
}
