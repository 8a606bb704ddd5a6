//! Maps user input onto store mutations.
//!
//! [`TaskApp`] owns the session state. The front-end turns DOM events into
//! [`Action`]s, and carries out the [`Effect`]s each action returns (timers,
//! haptics, focus) since those need the browser.
use chrono::TimeZone;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Display;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::filter::Filter;
use crate::storage::{PersistenceError, Storage, TaskRepository};
use crate::store::{REMOVAL_DELAY, StoreChange, TaskStore};
use crate::task::TaskId;
use crate::view::{Greeting, QuoteRotation, ViewModel};

/// Haptic pulse after adding a task.
pub const ADD_PULSE: Duration = Duration::from_millis(50);
/// Haptic pulse after toggling a task.
pub const TOGGLE_PULSE: Duration = Duration::from_millis(25);
/// How long the input shakes after an empty submit.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);
/// Minimum horizontal travel, in pixels, for a swipe to count.
pub const SWIPE_THRESHOLD_PX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The add button was clicked with the given input contents.
    Submit(String),
    /// A key was pressed while the input had focus.
    KeyPress { key: String, input: String },
    SelectFilter(Filter),
    Toggle(TaskId),
    Delete(TaskId),
    /// A touch went down at `start_x` and up at `end_x` on a task row.
    Swipe { id: TaskId, start_x: f64, end_x: f64 },
    /// The removal transition for `id` has finished.
    RemovalDue(TaskId),
}

/// Work the front-end performs after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Rebuild the page from [`TaskApp::view`].
    Render,
    Shake(Duration),
    ClearInput,
    FocusInput,
    Vibrate(Duration),
    /// Send [`Action::RemovalDue`] for `id` once `after` has elapsed.
    ScheduleRemoval { id: TaskId, after: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    Delete,
    Toggle,
}

impl SwipeAction {
    /// Swipes toward the start delete, swipes toward the end toggle, and
    /// anything not longer than [`SWIPE_THRESHOLD_PX`] is ignored.
    pub fn classify(start_x: f64, end_x: f64) -> Option<Self> {
        if (end_x - start_x).abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        if end_x < start_x {
            Some(SwipeAction::Delete)
        } else {
            Some(SwipeAction::Toggle)
        }
    }
}

/// One session of the task list.
pub struct TaskApp<S, C = SystemClock, R = StdRng> {
    store: TaskStore,
    repository: TaskRepository<S>,
    filter: Filter,
    greeting: Greeting,
    quote: QuoteRotation,
    clock: C,
    rng: R,
}

impl<S: Storage> TaskApp<S> {
    /// Loads the persisted collection and starts a session on the wall clock.
    pub fn open(storage: S) -> Result<Self, PersistenceError> {
        Self::with_parts(
            storage,
            SystemClock,
            StdRng::from_entropy(),
            Greeting::now_local(),
        )
    }
}

impl<S: Storage, C: Clock, R: Rng> TaskApp<S, C, R> {
    pub fn with_parts(
        storage: S,
        clock: C,
        mut rng: R,
        greeting: Greeting,
    ) -> Result<Self, PersistenceError> {
        let repository = TaskRepository::new(storage);
        let store = TaskStore::from_tasks(repository.load()?);
        tracing::info!(count = store.len(), "task session opened");
        let quote = QuoteRotation::pick(&mut rng);
        Ok(Self {
            store,
            repository,
            filter: Filter::default(),
            greeting,
            quote,
            clock,
            rng,
        })
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn repository(&self) -> &TaskRepository<S> {
        &self.repository
    }

    /// Applies one user action.
    ///
    /// A persistence failure aborts the action after the in-memory change
    /// and is returned to the caller.
    pub fn handle(&mut self, action: Action) -> Result<Vec<Effect>, PersistenceError> {
        let mut effects = Vec::new();
        match action {
            Action::Submit(input) => self.submit(&input, &mut effects)?,
            Action::KeyPress { key, input } => {
                if key == "Enter" {
                    self.submit(&input, &mut effects)?;
                }
            }
            Action::SelectFilter(filter) => {
                self.filter = filter;
                self.refresh(&mut effects);
            }
            Action::Toggle(id) => self.toggle(id, &mut effects)?,
            Action::Delete(id) => self.delete(id, &mut effects),
            Action::Swipe { id, start_x, end_x } => match SwipeAction::classify(start_x, end_x) {
                Some(SwipeAction::Delete) => self.delete(id, &mut effects),
                Some(SwipeAction::Toggle) => self.toggle(id, &mut effects)?,
                None => {}
            },
            Action::RemovalDue(id) => {
                if self.store.commit_removal(id).is_some() {
                    self.persist()?;
                    self.refresh(&mut effects);
                }
            }
        }
        Ok(effects)
    }

    /// Builds the page for the current state in the viewer's zone.
    pub fn view<Tz>(&self, tz: &Tz) -> ViewModel
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        ViewModel::render(&self.store, self.filter, self.greeting, self.quote, tz)
    }

    fn submit(&mut self, input: &str, effects: &mut Vec<Effect>) -> Result<(), PersistenceError> {
        let now = self.clock.now();
        match self.store.add(input, now) {
            Some(StoreChange::Added(_)) => {
                self.persist()?;
                self.refresh(effects);
                effects.extend([
                    Effect::ClearInput,
                    Effect::FocusInput,
                    Effect::Vibrate(ADD_PULSE),
                ]);
            }
            _ => effects.push(Effect::Shake(SHAKE_DURATION)),
        }
        Ok(())
    }

    fn toggle(&mut self, id: TaskId, effects: &mut Vec<Effect>) -> Result<(), PersistenceError> {
        let now = self.clock.now();
        if self.store.toggle(id, now).is_some() {
            self.persist()?;
            self.refresh(effects);
            effects.push(Effect::Vibrate(TOGGLE_PULSE));
        }
        Ok(())
    }

    // Only the row's transition starts here, so the quote is left alone.
    fn delete(&mut self, id: TaskId, effects: &mut Vec<Effect>) {
        if self.store.mark_for_removal(id).is_some() {
            effects.push(Effect::Render);
            effects.push(Effect::ScheduleRemoval {
                id,
                after: REMOVAL_DELAY,
            });
        }
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        self.repository.save(self.store.tasks())
    }

    fn refresh(&mut self, effects: &mut Vec<Effect>) {
        if self.quote.on_refresh(&mut self.rng) {
            tracing::debug!(quote = self.quote.text(), "motivational quote changed");
        }
        effects.push(Effect::Render);
    }
}
