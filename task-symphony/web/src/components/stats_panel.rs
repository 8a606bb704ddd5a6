use dioxus::prelude::*;

/// Task counts and the completion progress bar
#[component]
pub fn StatsPanel(total: usize, completed: usize, progress_width: String) -> Element {
    rsx! {
        div { class: "stats",
            div { class: "stat",
                span { id: "totalTasks", class: "stat-value", "{total}" }
                span { class: "stat-label", "Total" }
            }
            div { class: "stat",
                span { id: "completedTasks", class: "stat-value", "{completed}" }
                span { class: "stat-label", "Completed" }
            }
            div { class: "progress-bar",
                div { id: "progressFill", class: "progress-fill", style: "width: {progress_width}" }
            }
        }
    }
}
