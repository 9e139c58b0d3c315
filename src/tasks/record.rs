//! On-disk task records and their repair on load
//!
//! Records keep every field as loosely typed as the file allows so that a
//! single bad value never fails the whole load. Converting records into
//! `Task`s repairs what it can and logs what it changed:
//! - missing or malformed `created_at` / `completed_at` become the load time
//! - a malformed `due_date` is cleared
//! - a missing or unknown `priority` becomes medium
//! - a blank description becomes `(untitled)`
//! - `completed_at` on a pending record is dropped
//! - non-positive, out of range or duplicate ids are replaced by fresh ones
//!
//! Values of the wrong type (`null`, numbers where text is expected) are
//! read as text and then go through the same repairs.

use super::task::{DATE_FORMAT, Priority, TIMESTAMP_FORMAT, Task};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;

/// Description given to stored tasks that have none
pub const UNTITLED: &str = "(untitled)";

/// A task as written to the store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskRecord {
    #[serde(deserialize_with = "loose_id")]
    pub id: i64,
    #[serde(deserialize_with = "loose_string")]
    pub description: String,
    #[serde(deserialize_with = "loose_string")]
    pub priority: String,
    #[serde(deserialize_with = "loose_string")]
    pub due_date: String,
    #[serde(deserialize_with = "loose_string")]
    pub created_at: String,
    #[serde(deserialize_with = "loose_bool")]
    pub completed: bool,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "loose_optional_string"
    )]
    pub completed_at: Option<String>,
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn loose_optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(value_to_text(Value::deserialize(deserializer)?))
}

fn loose_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Anything that is not a whole number reads as 0, which gets a fresh id
fn loose_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: i64::from(task.id),
            description: task.description.clone(),
            priority: task.priority.as_str().to_string(),
            due_date: task
                .due_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            created_at: task.created_at.format(TIMESTAMP_FORMAT).to_string(),
            completed: task.is_completed(),
            completed_at: task
                .completed_at
                .map(|at| at.format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

/// Parse a stored timestamp
///
/// Date-only values are accepted as midnight of that day.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Convert one record, leaving id assignment to the caller
fn repair_record(record: TaskRecord, id: u32, now: NaiveDateTime) -> Task {
    let description = match record.description.trim() {
        "" => {
            warn!(task_id = id, "task without description, using {}", UNTITLED);
            UNTITLED.to_string()
        }
        text => text.to_string(),
    };

    let priority = if record.priority.trim().is_empty() {
        Priority::default()
    } else {
        record.priority.parse().unwrap_or_else(|_| {
            warn!(
                task_id = id,
                priority = %record.priority,
                "unknown priority, using medium"
            );
            Priority::default()
        })
    };

    let due_date = match record.due_date.trim() {
        "" => None,
        raw => match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
            Ok(d) => Some(d),
            Err(_) => {
                warn!(task_id = id, due_date = raw, "malformed due date, clearing it");
                None
            }
        },
    };

    let created_at = parse_timestamp(&record.created_at).unwrap_or_else(|| {
        warn!(
            task_id = id,
            created_at = %record.created_at,
            "malformed created_at, using current time"
        );
        now
    });

    let completed_at = match (record.completed, record.completed_at) {
        (true, Some(raw)) => Some(parse_timestamp(&raw).unwrap_or_else(|| {
            warn!(
                task_id = id,
                completed_at = %raw,
                "malformed completed_at, using current time"
            );
            now
        })),
        (true, None) => {
            warn!(task_id = id, "completed task without completed_at, using current time");
            Some(now)
        }
        (false, Some(_)) => {
            warn!(task_id = id, "pending task carries completed_at, dropping it");
            None
        }
        (false, None) => None,
    };

    Task {
        id,
        description,
        priority,
        due_date,
        created_at,
        completed_at,
    }
}

/// Turn loaded records into tasks, repairing malformed fields
pub fn repair_records(records: Vec<TaskRecord>, now: NaiveDateTime) -> Vec<Task> {
    let mut taken = HashSet::new();
    let stored: Vec<Option<u32>> = records
        .iter()
        .map(|record| {
            u32::try_from(record.id)
                .ok()
                .filter(|id| *id > 0 && taken.insert(*id))
        })
        .collect();

    let mut last = taken.iter().copied().max().unwrap_or(0);
    records
        .into_iter()
        .zip(stored)
        .map(|(record, stored)| {
            let id = stored.unwrap_or_else(|| {
                let fresh = fresh_id(&taken, last);
                warn!(old_id = record.id, new_id = fresh, "invalid or duplicate task id, reassigning");
                taken.insert(fresh);
                last = fresh;
                fresh
            });
            repair_record(record, id, now)
        })
        .collect()
}

/// The id after `last`, or the smallest free one once that runs out
fn fresh_id(taken: &HashSet<u32>, last: u32) -> u32 {
    last.checked_add(1)
        .filter(|id| !taken.contains(id))
        .or_else(|| (1..=u32::MAX).find(|id| !taken.contains(id)))
        .unwrap_or(u32::MAX)
}
