//! Browser-side session state for Task Symphony.
//!
//! Wraps the core [`TaskApp`] in a signal backed by `localStorage`, and
//! carries out the effects it returns: timers, haptics and input focus.

use dioxus::prelude::*;
use gloo_storage::{LocalStorage, Storage as _};
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use std::time::Duration;
use task_symphony_core::{Action, Effect, PersistenceError, Storage, TaskApp};

/// [`Storage`] over the browser's `localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| PersistenceError::Backend(format!("{err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| PersistenceError::Backend(format!("{err:?}")))
    }
}

/// Handle shared by every component of the page.
#[derive(Clone, Copy, PartialEq)]
pub struct TaskSession {
    pub app: Signal<TaskApp<BrowserStorage>>,
    pub input: Signal<String>,
    pub shaking: Signal<bool>,
    /// The new-task input, once it is mounted.
    pub input_element: Signal<Option<Rc<MountedData>>>,
}

impl TaskSession {
    /// Loads the persisted task list. The signals belong to the calling
    /// component, so this must run inside one.
    pub fn open() -> Result<Self, PersistenceError> {
        let app = TaskApp::open(BrowserStorage)?;
        Ok(Self {
            app: Signal::new(app),
            input: Signal::new(String::new()),
            shaking: Signal::new(false),
            input_element: Signal::new(None),
        })
    }

    /// Runs `action` against the task list and carries out its effects.
    pub fn dispatch(self, action: Action) {
        let mut app = self.app;
        let result = app.write().handle(action);
        match result {
            Ok(effects) => {
                for effect in effects {
                    self.apply(effect);
                }
            }
            Err(err) => tracing::error!("failed to save tasks: {err}"),
        }
    }

    fn apply(self, effect: Effect) {
        let Self {
            mut input,
            mut shaking,
            input_element,
            ..
        } = self;
        match effect {
            // Writing the app signal in `dispatch` already scheduled a re-render.
            Effect::Render => {}
            Effect::Shake(duration) => {
                shaking.set(true);
                spawn_forever(async move {
                    sleep(duration).await;
                    shaking.set(false);
                });
            }
            Effect::ClearInput => input.set(String::new()),
            Effect::FocusInput => {
                let Some(element) = input_element.cloned() else {
                    tracing::warn!("task input is not mounted, cannot focus it");
                    return;
                };
                spawn_forever(async move {
                    if let Err(err) = element.set_focus(true).await {
                        tracing::warn!("failed to focus task input: {err:?}");
                    }
                });
            }
            Effect::Vibrate(duration) => {
                let duration = millis(duration);
                let vibrated = web_sys::window()
                    .is_some_and(|window| window.navigator().vibrate_with_duration(duration));
                if !vibrated {
                    tracing::debug!("vibration is not available");
                }
            }
            // Spawned on the root scope so the removal still lands when the
            // row unmounts first, e.g. after a filter change.
            Effect::ScheduleRemoval { id, after } => {
                spawn_forever(async move {
                    sleep(after).await;
                    self.dispatch(Action::RemovalDue(id));
                });
            }
        }
    }
}

/// Browser timer and vibration APIs take whole milliseconds as `u32`.
fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

async fn sleep(duration: Duration) {
    TimeoutFuture::new(millis(duration)).await;
}
