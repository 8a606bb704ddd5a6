//! In-memory task collection, the single source of truth during a session.
//!
//! Every mutation is a pure state transition that reports what changed as a
//! [`StoreChange`]; persisting and re-rendering are left to the caller.
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::time::Duration;

use crate::filter::Filter;
use crate::sanitize::escape_html;
use crate::task::{Task, TaskId};

/// How long a row plays its slide-out transition before the task is removed.
pub const REMOVAL_DELAY: Duration = Duration::from_millis(300);

/// What a successful store operation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    Added(TaskId),
    Toggled { id: TaskId, completed: bool },
    MarkedForRemoval(TaskId),
    Removed(TaskId),
}

/// Aggregate counts over the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
}

impl Stats {
    /// Completion percentage in `[0, 100]`, 0 for an empty collection.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Ordered task collection, newest first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    leaving: BTreeSet<TaskId>,
    last_id: TaskId,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a store from a persisted collection, keeping its order. New ids
    /// continue after the largest loaded one.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(Task::id).max().unwrap_or_default();
        Self {
            tasks,
            leaving: BTreeSet::new(),
            last_id,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Whether the task is playing its removal transition.
    pub fn is_leaving(&self, id: TaskId) -> bool {
        self.leaving.contains(&id)
    }

    fn next_id(&mut self, now: DateTime<Utc>) -> TaskId {
        let candidate = now.timestamp_millis();
        let id = if candidate > self.last_id {
            candidate
        } else {
            self.last_id.saturating_add(1)
        };
        self.last_id = id;
        id
    }

    /// Adds a task at the front of the collection.
    ///
    /// Returns `None` without touching the store when `text` trims to empty.
    #[tracing::instrument(skip(self))]
    pub fn add(&mut self, text: &str, now: DateTime<Utc>) -> Option<StoreChange> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("rejected empty task text");
            return None;
        }
        let id = self.next_id(now);
        self.tasks.insert(0, Task::new(id, escape_html(text), now));
        tracing::debug!(id, "task added");
        Some(StoreChange::Added(id))
    }

    /// Flips completion of the task with `id`. No-op for unknown ids.
    #[tracing::instrument(skip(self))]
    pub fn toggle(&mut self, id: TaskId, now: DateTime<Utc>) -> Option<StoreChange> {
        let task = self.tasks.iter_mut().find(|task| task.id() == id)?;
        let completed = task.toggle(now);
        tracing::debug!(id, completed, "task toggled");
        Some(StoreChange::Toggled { id, completed })
    }

    /// First phase of a delete: flags the task as leaving. The task stays in
    /// the collection until [`TaskStore::commit_removal`].
    ///
    /// Unknown ids and tasks already leaving are ignored.
    pub fn mark_for_removal(&mut self, id: TaskId) -> Option<StoreChange> {
        if self.get(id).is_none() || !self.leaving.insert(id) {
            return None;
        }
        tracing::debug!(id, "task marked for removal");
        Some(StoreChange::MarkedForRemoval(id))
    }

    /// Second phase of a delete: drops the task with `id`, whether or not it
    /// was marked. No-op when it is already gone.
    pub fn commit_removal(&mut self, id: TaskId) -> Option<StoreChange> {
        self.leaving.remove(&id);
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        self.tasks.remove(position);
        tracing::debug!(id, "task removed");
        Some(StoreChange::Removed(id))
    }

    /// Tasks matching `filter`, in collection order.
    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.iter().filter(|task| filter.matches(task)).collect()
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total: self.tasks.len(),
            completed: self.tasks.iter().filter(|task| task.is_completed()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 15, minute, 0).unwrap()
    }

    #[test]
    fn can_add_task_at_front() {
        let mut store = TaskStore::new();

        store.add("First", at(0));
        let change = store.add("Second", at(1));

        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[0].text(), "Second");
        assert_eq!(store.tasks()[1].text(), "First");
        assert_eq!(change, Some(StoreChange::Added(store.tasks()[0].id())));
    }

    #[test]
    fn can_use_creation_millis_as_id() {
        let mut store = TaskStore::new();

        store.add("Buy milk", at(7));

        assert_eq!(store.tasks()[0].id(), at(7).timestamp_millis());
    }

    #[test]
    fn can_keep_ids_unique_within_same_millisecond() {
        let mut store = TaskStore::new();

        store.add("One", at(0));
        store.add("Two", at(0));
        store.add("Three", at(0) - TimeDelta::seconds(1));

        let ids: Vec<TaskId> = store.tasks().iter().map(Task::id).collect();
        let base = at(0).timestamp_millis();
        assert_eq!(ids, vec![base + 2, base + 1, base]);
    }

    #[test]
    fn can_reject_blank_text() {
        let mut store = TaskStore::new();

        assert_eq!(store.add("", at(0)), None);
        assert_eq!(store.add("   \t\n", at(0)), None);
        assert!(store.is_empty());
    }

    #[test]
    fn can_trim_and_escape_text() {
        let mut store = TaskStore::new();

        store.add("  <b>bold</b> & brave  ", at(0));

        assert_eq!(store.tasks()[0].text(), "&lt;b&gt;bold&lt;/b&gt; &amp; brave");
    }

    #[test]
    fn can_toggle_and_toggle_back() {
        let mut store = TaskStore::new();
        store.add("Buy milk", at(0));
        let id = store.tasks()[0].id();

        let change = store.toggle(id, at(5));
        assert_eq!(change, Some(StoreChange::Toggled { id, completed: true }));
        assert_eq!(store.get(id).unwrap().completed_at(), Some(at(5)));

        store.toggle(id, at(6));
        let task = store.get(id).unwrap();
        assert!(!task.is_completed());
        assert_eq!(task.completed_at(), None);
    }

    #[test]
    fn can_ignore_toggle_of_unknown_id() {
        let mut store = TaskStore::new();
        store.add("Buy milk", at(0));
        let before = store.clone();

        assert_eq!(store.toggle(42, at(1)), None);
        assert_eq!(store, before);
    }

    #[test]
    fn can_remove_in_two_phases() {
        let mut store = TaskStore::new();
        store.add("Keep", at(0));
        store.add("Drop", at(1));
        let id = store.tasks()[0].id();

        assert_eq!(store.mark_for_removal(id), Some(StoreChange::MarkedForRemoval(id)));
        assert!(store.is_leaving(id));
        assert_eq!(store.len(), 2);

        assert_eq!(store.commit_removal(id), Some(StoreChange::Removed(id)));
        assert!(!store.is_leaving(id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].text(), "Keep");
    }

    #[test]
    fn can_ignore_repeated_or_unknown_removal() {
        let mut store = TaskStore::new();
        store.add("Buy milk", at(0));
        let id = store.tasks()[0].id();

        assert_eq!(store.mark_for_removal(42), None);
        assert!(store.mark_for_removal(id).is_some());
        assert_eq!(store.mark_for_removal(id), None);

        assert!(store.commit_removal(id).is_some());
        assert_eq!(store.commit_removal(id), None);
        assert_eq!(store.commit_removal(42), None);
    }

    #[test]
    fn can_filter_preserving_order() {
        let mut store = TaskStore::new();
        store.add("a", at(0));
        store.add("b", at(1));
        store.add("c", at(2));
        let b = store.tasks()[1].id();
        store.toggle(b, at(3));

        let texts = |filter| -> Vec<String> {
            store
                .filtered(filter)
                .iter()
                .map(|task| task.text().to_string())
                .collect()
        };

        assert_eq!(texts(Filter::All), vec!["c", "b", "a"]);
        assert_eq!(texts(Filter::Active), vec!["c", "a"]);
        assert_eq!(texts(Filter::Completed), vec!["b"]);
    }

    #[test]
    fn can_compute_stats() {
        let mut store = TaskStore::new();
        assert_eq!(store.stats().percent(), 0.0);

        store.add("a", at(0));
        store.add("b", at(1));
        store.add("c", at(2));
        store.add("d", at(3));
        let id = store.tasks()[0].id();
        store.toggle(id, at(4));

        let stats = store.stats();
        assert_eq!(stats, Stats { total: 4, completed: 1 });
        assert_eq!(stats.percent(), 25.0);
    }

    #[test]
    fn can_continue_ids_after_restoring() {
        let mut original = TaskStore::new();
        original.add("Old", at(30));
        let restored_from = original.tasks().to_vec();

        let mut store = TaskStore::from_tasks(restored_from);
        store.add("New", at(0));

        assert!(store.tasks()[0].id() > store.tasks()[1].id());
    }

    #[test]
    fn can_add_after_restoring_largest_possible_id() {
        let restored = Task::new(i64::MAX, "Far future".to_string(), at(0));
        let mut store = TaskStore::from_tasks(vec![restored]);

        let change = store.add("Next", at(1));

        assert_eq!(change, Some(StoreChange::Added(i64::MAX)));
        assert_eq!(store.len(), 2);
    }
}
