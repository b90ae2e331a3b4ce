use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            class: "x-loading-indicator",
            style: "color: rgba(0,0,0,0.6); font-size: 20px; padding: 10px; margin: 15px;",
            "Loading..."
        }
    }
}
