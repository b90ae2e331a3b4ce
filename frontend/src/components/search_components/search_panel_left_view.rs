//! Left panel: facet tabs and the facets of the selected tab.

use common::facets::FacetKind;
use dioxus::prelude::*;

use crate::{
    components::{loading_indicator::LoadingIndicator, search_components::search_facets::{RangeFacetPanel, TextFacetPanel}},
    data_definitions::search_context::SearchContext,
};

#[component]
pub fn SearchPanelLeftView() -> Element {
    let SearchContext { state, .. } = use_context::<SearchContext>();
    let mut selected_tab = use_signal(|| 0_usize);
    let tabs = use_memo(move || {
        state.read().facets().tabs().into_iter()
            .map(|tab| tab.into_iter().cloned().collect::<Vec<_>>())
            .collect::<Vec<_>>()
    });

    if !state.read().facets().is_loaded() {
        return rsx! { LoadingIndicator {} };
    }
    let tabs = tabs();
    let current = (*selected_tab.read()).min(tabs.len().saturating_sub(1));

    rsx! {
        div {
            id: "x-search-facet-tabs",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                gap: 4px;
                padding: 10px;
            ",
            for (index, tab) in tabs.iter().enumerate() {
                button {
                    key: "{index}",
                    style: "
                        cursor: pointer;
                        border: 1px solid rgba(0,0,0,0.3);
                        border-radius: 1000px;
                        padding: 6px 12px;
                        font-size: 14px;
                        background-color: {tab_colors(index == current).0};
                        color: {tab_colors(index == current).1};
                    ",
                    onclick: move |_| selected_tab.set(index),
                    {tab.iter().map(|definition| definition.label.as_str()).collect::<Vec<_>>().join(" / ")}
                }
            }
        }
        if let Some(tab) = tabs.get(current) {
            for definition in tab.iter().cloned() {
                div {
                    key: "{definition.name}",
                    class: "x-facet-section",
                    style: "margin: 10px; padding: 10px; background-color: white; border-radius: 10px;",
                    h3 {
                        style: "font-size: 18px; font-weight: 500; margin-bottom: 8px;",
                        "{definition.label}"
                    }
                    {match definition.kind {
                        FacetKind::Text => rsx! { TextFacetPanel { facet_name: definition.name.clone() } },
                        FacetKind::Range => rsx! { RangeFacetPanel { facet_name: definition.name.clone() } },
                    }}
                }
            }
        }
    }
}

/// Background and text colour of a tab button.
fn tab_colors(selected: bool) -> (&'static str, &'static str) {
    if selected { ("#1C212D", "white") } else { ("white", "#1C212D") }
}
