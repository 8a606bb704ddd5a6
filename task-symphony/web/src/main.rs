use chrono::Local;
use dioxus::prelude::*;

mod components;
mod state;

use components::{
    EmptyState, ErrorMessage, FilterBar, Header, Motivation, StatsPanel, TaskInput, TaskList,
};
use state::TaskSession;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let session = use_hook(|| TaskSession::open().map_err(|err| err.to_string()));

    let body = match session {
        Ok(session) => rsx! { TaskBoard { session } },
        Err(message) => rsx! {
            ErrorMessage { message: format!("Could not load your tasks: {message}") }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {body}
    }
}

/// The task list page, rebuilt from a fresh view model on every render.
#[component]
fn TaskBoard(session: TaskSession) -> Element {
    use_context_provider(|| session);
    let view = session.app.read().view(&Local);

    rsx! {
        div { class: "container",
            Header { greeting: view.greeting.to_string() }
            StatsPanel {
                total: view.total,
                completed: view.completed,
                progress_width: view.progress_width(),
            }
            TaskInput {}
            FilterBar { filters: view.filters.clone() }
            TaskList { rows: view.rows.clone() }
            if view.show_empty_state {
                EmptyState {}
            }
            Motivation { quote: view.quote.to_string() }
        }
    }
}
