use dioxus::prelude::*;

#[component]
pub fn Motivation(quote: String) -> Element {
    rsx! {
        div { class: "motivation",
            p { id: "motivationalText", "{quote}" }
        }
    }
}
