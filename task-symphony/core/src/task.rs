use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity key of a task: the creation time in milliseconds, bumped when two
/// tasks are created within the same millisecond.
pub type TaskId = i64;

/// A single to-do item.
///
/// The JSON shape uses camelCase keys so collections written by earlier
/// browser builds (`createdAt`, `completedAt`) load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates an incomplete task. `text` must already be sanitized.
    pub(crate) fn new(id: TaskId, text: String, created_at: DateTime<Utc>) -> Self {
        Task {
            id,
            text,
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// The HTML-escaped display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Flips completion, keeping `completed_at` set exactly when completed.
    /// Returns the new completion state.
    pub(crate) fn toggle(&mut self, now: DateTime<Utc>) -> bool {
        self.completed = !self.completed;
        self.completed_at = self.completed.then_some(now);
        self.completed
    }
}
