use super::TaskItem;
use dioxus::prelude::*;
use task_symphony_core::TaskRow;

#[component]
pub fn TaskList(rows: Vec<TaskRow>) -> Element {
    rsx! {
        ul { id: "tasksList", class: "tasks-list",
            for row in rows {
                TaskItem { key: "{row.id}", row }
            }
        }
    }
}
