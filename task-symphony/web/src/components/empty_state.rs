use dioxus::prelude::*;

/// Shown when the current filter leaves nothing to list
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        div { id: "emptyState", class: "empty-state",
            div { class: "empty-icon", "📝" }
            p { "No tasks here yet. Add one above!" }
        }
    }
}
