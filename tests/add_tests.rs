//! Add operation tests
mod common;

use chrono::NaiveDate;
use smart_tasks::*;

#[test]
fn test_add_task_assigns_fields() {
    let (mut manager, _temp_file) = common::get_test_manager();

    let task = manager.add("  Buy groceries  ", Priority::High, "2025-03-15").unwrap();

    assert_eq!(task.id, 1);
    assert_eq!(task.description, "Buy groceries");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2025, 3, 15));
    assert!(task.is_pending());
    assert_eq!(task.completed_at, None);
    assert_eq!(manager.list_all().len(), 1);
}

#[test]
fn test_add_without_due_date() {
    let (mut manager, _temp_file) = common::get_test_manager();

    let task = manager.add("Read a book", Priority::default(), "").unwrap();

    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date, None);
}

#[test]
fn test_add_stamps_created_at_now() {
    let (mut manager, _temp_file) = common::get_test_manager();

    let before = local_now();
    let task = manager.add("Stretch", Priority::Low, "").unwrap();
    let after = local_now();

    assert!(task.created_at >= before);
    assert!(task.created_at <= after);
}

#[test]
fn test_add_ids_follow_count() {
    let (mut manager, _temp_file) = common::get_test_manager();

    let ids: Vec<u32> = (0..3)
        .map(|i| manager.add(&format!("Task {}", i), Priority::Medium, "").unwrap().id)
        .collect();

    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_add_after_delete_keeps_ids_unique() {
    let (mut manager, _temp_file) = common::get_test_manager();
    for i in 0..3 {
        manager.add(&format!("Task {}", i), Priority::Medium, "").unwrap();
    }

    manager.delete(1).unwrap();
    let task = manager.add("Another", Priority::Medium, "").unwrap();

    assert_eq!(task.id, 4);
    let mut ids: Vec<u32> = manager.list_all().iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), manager.list_all().len());
}

#[test]
fn test_add_empty_description_fails() {
    let (mut manager, _temp_file) = common::get_test_manager();
    manager.add("Existing", Priority::Medium, "").unwrap();

    let result = manager.add("", Priority::Medium, "");

    assert!(matches!(
        result,
        Err(TaskError::Validation(ValidationError::EmptyDescription))
    ));
    assert_eq!(manager.list_all().len(), 1);
}

#[test]
fn test_add_whitespace_description_fails() {
    let (mut manager, _temp_file) = common::get_test_manager();

    let result = manager.add("   \t", Priority::High, "");

    assert!(matches!(
        result,
        Err(TaskError::Validation(ValidationError::EmptyDescription))
    ));
    assert!(manager.list_all().is_empty());
}

#[test]
fn test_add_invalid_due_date_fails() {
    let (mut manager, temp_file) = common::get_test_manager();

    let result = manager.add("Submit form", Priority::High, "2025-02-30");

    match result {
        Err(TaskError::Validation(ValidationError::InvalidDate(value))) => {
            assert_eq!(value, "2025-02-30")
        }
        other => panic!("expected InvalidDate, got {:?}", other),
    }
    assert!(manager.list_all().is_empty());
    assert!(common::reopen(&temp_file).list_all().is_empty());
}

#[test]
fn test_add_persists_immediately() {
    let (mut manager, temp_file) = common::get_test_manager();

    let added = manager.add("Water plants", Priority::Low, "2025-07-01").unwrap();

    let reopened = common::reopen(&temp_file);
    let loaded = reopened.tasks().find_by_id(added.id).unwrap();
    assert_eq!(loaded.description, added.description);
    assert_eq!(loaded.priority, added.priority);
    assert_eq!(loaded.due_date, added.due_date);
    assert_eq!(loaded, &added);
}

#[test]
fn test_validation_errors_are_recoverable() {
    let (mut manager, _temp_file) = common::get_test_manager();

    let err = manager.add("", Priority::Low, "").unwrap_err();

    assert!(err.is_recoverable());
    assert_eq!(err.to_string(), "task description cannot be empty");
}
