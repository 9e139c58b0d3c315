//! Delete and clear-completed tests
mod common;

use smart_tasks::*;

#[test]
fn test_delete_task() {
    let (mut manager, _temp_file) = common::get_test_manager();
    manager.add("Keep", Priority::Low, "").unwrap();
    let doomed = manager.add("Remove", Priority::Low, "").unwrap();

    let removed = manager.delete(doomed.id).unwrap();

    assert_eq!(removed, doomed);
    assert_eq!(manager.list_all().len(), 1);
    assert!(manager.tasks().find_by_id(doomed.id).is_none());
}

#[test]
fn test_delete_nonexistent_task() {
    let (mut manager, _temp_file) = common::get_test_manager();
    manager.add("Keep", Priority::Low, "").unwrap();

    let result = manager.delete(99);

    assert!(matches!(result, Err(TaskError::NotFound(99))));
    assert_eq!(manager.list_all().len(), 1);
}

#[test]
fn test_delete_persists() {
    let (mut manager, temp_file) = common::get_test_manager();
    let task = manager.add("Remove", Priority::Low, "").unwrap();

    manager.delete(task.id).unwrap();

    assert!(common::reopen(&temp_file).list_all().is_empty());
}

#[test]
fn test_clear_completed() {
    let (mut manager, temp_file) = common::get_test_manager();
    for i in 1..=5 {
        manager.add(&format!("Task {}", i), Priority::Medium, "").unwrap();
    }
    manager.complete(2).unwrap();
    manager.complete(4).unwrap();

    let removed = manager.clear_completed().unwrap();

    assert_eq!(removed, 2);
    assert_eq!(manager.list_all().len(), 3);
    assert!(manager.list_all().iter().all(|t| t.is_pending()));
    let ids: Vec<u32> = common::reopen(&temp_file)
        .list_all()
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn test_clear_completed_with_nothing_completed() {
    let (mut manager, _temp_file) = common::get_test_manager();
    manager.add("Pending", Priority::Medium, "").unwrap();

    assert_eq!(manager.clear_completed().unwrap(), 0);
    assert_eq!(manager.list_all().len(), 1);
}

#[test]
fn test_clear_completed_on_empty_list() {
    let (mut manager, _temp_file) = common::get_test_manager();

    assert_eq!(manager.clear_completed().unwrap(), 0);
}
