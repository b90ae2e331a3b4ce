use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");
// main.css and the keyword bar both set Roboto
const ROBOTO_CSS: &str = "https://fonts.googleapis.com/css2?family=Roboto:wght@300;400;500;700&display=swap";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ROBOTO_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "Catalogue search".to_string(),
            Router::<Route> {}
        }
    }
}
