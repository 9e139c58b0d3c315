use crate::tasks::task::Task;

/// The ordered collection of all tasks
///
/// A `Vec` in insertion order is the only storage: the full list view shows
/// tasks in the order they were added, the smart view breaks score ties by
/// that same order, and the file is rewritten in it on every save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    pub(crate) tasks: Vec<Task>,
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl TaskList {
    /// Create a new empty TaskList instance
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find a task by its ID
    pub fn find_by_id(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Find a task by its ID and return a mutable reference
    pub(crate) fn find_by_id_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Generate the id for the next task
    ///
    /// Normally one past the current count. After deletions that id may
    /// still be in use, in which case the id after the largest one is used,
    /// or the smallest free id when the largest is `u32::MAX`.
    pub fn next_id(&self) -> u32 {
        let candidate = u32::try_from(self.tasks.len())
            .ok()
            .and_then(|count| count.checked_add(1));
        if let Some(id) = candidate.filter(|id| !self.contains(*id)) {
            return id;
        }
        self.max_id()
            .checked_add(1)
            .or_else(|| (1..=u32::MAX).find(|id| !self.contains(*id)))
            .unwrap_or(u32::MAX)
    }

    /// Largest id currently stored, or 0 for an empty list
    pub fn max_id(&self) -> u32 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0)
    }

    /// Append a task to the end of the list
    pub(crate) fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Remove a task from the collection and return it
    pub(crate) fn remove(&mut self, id: u32) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(pos))
    }

    /// Remove every completed task, returning how many were removed
    pub(crate) fn remove_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.is_pending());
        before - self.tasks.len()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::task::Priority;
    use chrono::NaiveDate;

    fn task(id: u32) -> Task {
        let created = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Task::new(id, format!("Task {}", id), Priority::Medium, None, created)
    }

    #[test]
    fn test_next_id_on_empty_list() {
        assert_eq!(TaskList::new().next_id(), 1);
    }

    #[test]
    fn test_next_id_follows_count() {
        let list: TaskList = (1..=3).map(task).collect();
        assert_eq!(list.next_id(), 4);
    }

    #[test]
    fn test_next_id_skips_taken_id_after_delete() {
        let mut list: TaskList = (1..=3).map(task).collect();
        list.remove(1);
        // count + 1 == 3 is still taken by the last task
        assert_eq!(list.next_id(), 4);
    }

    #[test]
    fn test_next_id_reuses_free_slot() {
        let mut list: TaskList = (1..=3).map(task).collect();
        list.remove(3);
        assert_eq!(list.next_id(), 3);
    }

    #[test]
    fn test_next_id_after_max_id_falls_back_to_smallest_free() {
        let list: TaskList = [task(1), task(2), task(u32::MAX)].into_iter().collect();
        // count + 1 == 4 is free
        assert_eq!(list.next_id(), 4);

        let list: TaskList = [task(3), task(u32::MAX)].into_iter().collect();
        assert_eq!(list.next_id(), 1);
    }

    #[test]
    fn test_remove_missing_returns_none() {
        let mut list: TaskList = (1..=2).map(task).collect();
        assert!(list.remove(9).is_none());
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_completed_counts() {
        let mut list: TaskList = (1..=4).map(task).collect();
        let done = list.tasks[0].created_at;
        list.find_by_id_mut(2).unwrap().mark_completed(done);
        list.find_by_id_mut(4).unwrap().mark_completed(done);

        assert_eq!(list.remove_completed(), 2);
        let ids: Vec<u32> = list.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
