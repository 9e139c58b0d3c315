//! Operation handlers for the task store
//!
//! This module contains the implementation of every TaskManager operation.
//! Each handler is in a separate file for better organization.

pub mod add;
pub mod clear_completed;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod list;
