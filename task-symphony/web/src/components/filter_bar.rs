use crate::state::TaskSession;
use dioxus::prelude::*;
use task_symphony_core::{Action, FilterControl};

/// The all / active / completed selector
#[component]
pub fn FilterBar(filters: Vec<FilterControl>) -> Element {
    let session = use_context::<TaskSession>();

    rsx! {
        div { class: "filters",
            for control in filters {
                button {
                    key: "{control.filter}",
                    class: if control.active { "filter-btn active" } else { "filter-btn" },
                    "data-filter": "{control.filter}",
                    onclick: move |_| session.dispatch(Action::SelectFilter(control.filter)),
                    "{control.filter.label()}"
                }
            }
        }
    }
}
