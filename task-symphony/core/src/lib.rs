//! Core domain model and session logic for Task Symphony.
//!
//! Everything here is free of UI and browser dependencies: the web front-end
//! feeds user [`Action`]s into a [`TaskApp`], executes the returned
//! [`Effect`]s and renders the [`ViewModel`] it produces.
pub mod clock;
pub mod filter;
pub mod interaction;
pub mod sanitize;
pub mod storage;
pub mod store;
pub mod task;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use filter::Filter;
pub use interaction::{Action, Effect, SwipeAction, TaskApp};
pub use storage::{MemoryStorage, PersistenceError, STORAGE_KEY, Storage, TaskRepository};
pub use store::{Stats, StoreChange, TaskStore};
pub use task::{Task, TaskId};
pub use view::{FilterControl, Greeting, QuoteRotation, TaskRow, ViewModel};
