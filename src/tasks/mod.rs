//! Task domain models
//!
//! This module contains the core task data structures. It is split into
//! submodules:
//! - `task`: the Task entity and its Priority
//! - `task_list`: the ordered collection owned by the store
//! - `queries`: read-only views and statistics over the collection
//! - `record`: the on-disk record shape and load-time repair
//! - `serde_impl`: Serialize/Deserialize for TaskList

mod queries;
mod record;
mod serde_impl;
mod task;
mod task_list;

pub use queries::TaskStats;
pub use task::{DATE_FORMAT, Priority, TIMESTAMP_FORMAT, Task, local_date_today, local_now};
pub use task_list::TaskList;
