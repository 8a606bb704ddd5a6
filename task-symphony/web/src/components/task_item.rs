use crate::state::TaskSession;
use dioxus::prelude::*;
use task_symphony_core::{Action, TaskRow};

/// One task row. Swiping it far enough toggles or deletes the task.
#[component]
pub fn TaskItem(row: TaskRow) -> Element {
    let session = use_context::<TaskSession>();
    let mut touch_start_x = use_signal(|| 0.0_f64);
    let id = row.id;
    let time_class = if row.completed {
        "completion-time"
    } else {
        "creation-time"
    };

    rsx! {
        li {
            class: "{row.class()}",
            "data-task-id": "{id}",
            ontouchstart: move |evt: TouchEvent| {
                if let Some(point) = evt.touches_changed().first() {
                    touch_start_x.set(point.screen_coordinates().x);
                }
            },
            ontouchend: move |evt: TouchEvent| {
                if let Some(point) = evt.touches_changed().first() {
                    session.dispatch(Action::Swipe {
                        id,
                        start_x: touch_start_x(),
                        end_x: point.screen_coordinates().x,
                    });
                }
            },
            div { class: "task-content",
                // Task text is escaped when it is added.
                span { class: "task-text", dangerous_inner_html: "{row.text}" }
                div { class: "task-actions",
                    button {
                        class: "task-btn complete",
                        onclick: move |_| session.dispatch(Action::Toggle(id)),
                        "{row.toggle_label}"
                    }
                    button {
                        class: "task-btn delete",
                        onclick: move |_| session.dispatch(Action::Delete(id)),
                        "Delete"
                    }
                }
            }
            div { class: "task-meta",
                span { class: time_class,
                    span { class: "time-label", "{row.time_label}" }
                    " {row.time}"
                }
            }
        }
    }
}
