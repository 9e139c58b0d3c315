//! Common test utilities for integration tests
#![allow(dead_code)]

use smart_tasks::TaskManager;
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a test manager with temporary TOML storage
pub fn get_test_manager() -> (TaskManager, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let manager = TaskManager::new(temp_file.path()).unwrap();
    (manager, temp_file)
}

/// Create a test manager with temporary JSON storage
pub fn get_json_test_manager() -> (TaskManager, NamedTempFile) {
    let temp_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    let manager = TaskManager::new(temp_file.path()).unwrap();
    (manager, temp_file)
}

/// Write raw store content to a temporary file with the given suffix
pub fn write_store(content: &str, suffix: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

/// Open a second manager on the same file, as a fresh process would
pub fn reopen(temp_file: &NamedTempFile) -> TaskManager {
    TaskManager::new(temp_file.path()).unwrap()
}
