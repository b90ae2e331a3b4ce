use dioxus::prelude::*;

use crate::{components::loading_indicator::LoadingIndicator, data_definitions::search_context::SearchContext};

/// Result markup as rendered by the archive.
#[component]
pub fn SearchResultsView() -> Element {
    let SearchContext { state, .. } = use_context::<SearchContext>();
    let loaded = use_memo(move || state.read().results().is_loaded());
    let content = use_memo(move || state.read().results().content().to_string());

    if !loaded() {
        return rsx! { LoadingIndicator {} };
    }
    rsx! {
        div {
            id: "x-search-results-wrapper",
            style: "
                width: 100%;
                flex-grow: 1;
                overflow-y: auto;
            ",
            dangerous_inner_html: "{content}",
        }
    }
}
