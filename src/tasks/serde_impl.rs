//! Serialization and deserialization implementations for TaskList
//!
//! A TaskList is written as a plain sequence of `TaskRecord`s. Reading goes
//! through the same records and repairs malformed fields against the
//! current time (see `record.rs`).

use super::record::{TaskRecord, repair_records};
use super::task::local_now;
use super::task_list::TaskList;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<'de> Deserialize<'de> for TaskList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<TaskRecord>::deserialize(deserializer)?;
        Ok(TaskList {
            tasks: repair_records(records, local_now()),
        })
    }
}

impl Serialize for TaskList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.tasks.len()))?;
        for task in &self.tasks {
            seq.serialize_element(&TaskRecord::from(task))?;
        }
        seq.end()
    }
}
