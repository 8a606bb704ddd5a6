//! Persistence of the task collection into a named key-value text slot.
use std::collections::HashMap;
use thiserror::Error;

use crate::task::Task;

/// Name of the slot holding the serialized collection.
pub const STORAGE_KEY: &str = "task-symphony-data";

#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The storage backend refused the read or write, e.g. quota exceeded.
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("failed to serialize tasks")]
    Serialize(#[from] serde_json::Error),
}

/// A key-value store of text slots, such as browser local storage.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Map-backed [`Storage`], useful off the browser.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage with one slot already filled.
    pub fn with_slot(key: impl ToString, value: impl ToString) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), value.to_string());
        Self { slots }
    }

    pub fn slot(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Saves and loads the whole collection as one JSON array.
#[derive(Debug, Clone)]
pub struct TaskRepository<S> {
    storage: S,
    key: String,
}

impl<S: Storage> TaskRepository<S> {
    /// A repository over the default [`STORAGE_KEY`] slot.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl ToString) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrites the slot with the serialized collection.
    pub fn save(&mut self, tasks: &[Task]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string(tasks)?;
        self.storage.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, count = tasks.len(), "tasks saved");
        Ok(())
    }

    /// Reads the collection back.
    ///
    /// An absent slot yields an empty collection, and so does a slot that no
    /// longer holds a valid task array. Backend failures are returned.
    pub fn load(&self) -> Result<Vec<Task>, PersistenceError> {
        let Some(json) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&json) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "discarding unreadable task data");
                Ok(Vec::new())
            }
        }
    }
}
