use crate::state::TaskSession;
use dioxus::prelude::*;
use task_symphony_core::Action;

/// Text input and add button. Adds on click or Enter, shakes on empty input.
#[component]
pub fn TaskInput() -> Element {
    let session = use_context::<TaskSession>();
    let mut input = session.input;
    let mut input_element = session.input_element;
    let class = if *session.shaking.read() {
        "task-input shake"
    } else {
        "task-input"
    };

    rsx! {
        div { class: "input-section",
            input {
                id: "taskInput",
                class: "{class}",
                r#type: "text",
                placeholder: "What needs to be done?",
                value: "{input}",
                onmounted: move |evt: MountedEvent| input_element.set(Some(evt.data())),
                oninput: move |evt| input.set(evt.value()),
                onkeypress: move |evt: KeyboardEvent| {
                    let key = evt.key();
                    if is_submit_key(&key) {
                        session.dispatch(Action::KeyPress {
                            key: key.to_string(),
                            input: input(),
                        })
                    }
                },
            }
            button {
                id: "addTaskBtn",
                class: "add-button",
                onclick: move |_| session.dispatch(Action::Submit(input())),
                "Add Task"
            }
        }
    }
}

/// Other keys never change the task list, so they are not dispatched.
fn is_submit_key(key: &Key) -> bool {
    *key == Key::Enter
}
