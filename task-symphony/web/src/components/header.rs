use dioxus::prelude::*;

#[component]
pub fn Header(greeting: String) -> Element {
    rsx! {
        header { class: "header",
            h1 { "Task Symphony" }
            p { id: "welcomeText", class: "welcome-text", "{greeting}" }
        }
    }
}
