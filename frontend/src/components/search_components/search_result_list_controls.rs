//! Results summary, sort order and pagination.

use common::{search_const::RESOURCE_NAME, search_query::SortOption};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};
use search_state::{SearchAction, pagination::pagination_window, results_store::results_summary};

use crate::data_definitions::search_context::SearchContext;

#[component]
pub fn SearchResultListControls() -> Element {
    rsx! {
        div {
            id: "x-search-results-title-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
                padding: 7px;
                margin: 1px;
                min-height: 56px;
                width: 100%;
            ",
            h1 {
                style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112);  border-bottom: 1px solid rgb(75, 87, 112);",
                ResultsSummary {}
            }
            SortSelect {}
            // empty space
            div { style: "flex-grow: 1;" }
            PaginationControls {}
        }
    }
}

#[component]
fn ResultsSummary() -> Element {
    let SearchContext { state, .. } = use_context::<SearchContext>();
    let state = state.read();
    // facet counts usually arrive first on the initial load
    let total = if state.results().is_loaded() {
        Some(state.results().total_results())
    } else {
        state.facets().total_results()
    };
    match total {
        Some(total) => rsx! { "{results_summary(total, RESOURCE_NAME)}" },
        None => rsx! { "..." },
    }
}

#[component]
fn SortSelect() -> Element {
    let SearchContext { state, dispatch } = use_context::<SearchContext>();
    let current = use_memo(move || state.read().sort());
    let has_keyword = use_memo(move || state.read().keyword_query().is_some());
    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px; font-size: 15px;",
            "Sort by"
            select {
                style: "font-size: 15px; padding: 4px; border-radius: 6px;",
                onchange: move |event: Event<FormData>| {
                    if let Ok(sort) = event.value().parse::<SortOption>() {
                        dispatch(SearchAction::ChangeSort(sort));
                    }
                },
                for sort_option in SortOption::ALL {
                    option {
                        key: "{sort_option}",
                        value: sort_option.as_str(),
                        selected: sort_option == current(),
                        disabled: sort_option.requires_keyword() && !has_keyword(),
                        "{sort_option.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn PaginationControls() -> Element {
    let SearchContext { state, dispatch } = use_context::<SearchContext>();
    let current_page = use_memo(move || state.read().page());
    let window = use_memo(move || pagination_window(current_page(), state.read().results().total_pages()));
    let window = window();
    if window.pages.is_empty() {
        return rsx! {};
    }
    let last_page = state.read().results().total_pages();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 6px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Previous Page",
                disabled: !window.has_previous,
                onclick: move |_| dispatch(SearchAction::PreviousPage),
            }
            if window.show_first {
                PageLink { page: 1, current: false }
            }
            if window.leading_gap {
                span { "…" }
            }
            for page in window.pages.iter().copied() {
                PageLink { key: "{page}", page, current: page == current_page() }
            }
            if window.trailing_gap {
                span { "…" }
            }
            if window.show_last {
                PageLink { page: last_page, current: false }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Next Page",
                disabled: !window.has_next,
                onclick: move |_| dispatch(SearchAction::NextPage),
            }
        }
    }
}

#[component]
fn PageLink(page: u32, current: bool) -> Element {
    let SearchContext { dispatch, .. } = use_context::<SearchContext>();
    let (background, color) = if current { ("#1C212D", "white") } else { ("white", "black") };
    rsx! {
        button {
            disabled: current,
            style: "
                min-width: 32px;
                height: 32px;
                border-radius: 6px;
                border: 1px solid rgba(0,0,0,0.1);
                background: {background};
                color: {color};
                cursor: pointer;
            ",
            onclick: move |_| dispatch(SearchAction::GoToPage(page)),
            "{page}"
        }
    }
}

#[component]
pub fn NavigationButton<I: dioxus_free_icons::IconShape + Clone + PartialEq + 'static>(icon: I, label: String, disabled: ReadSignal<bool>, onclick: Callback<()>) -> Element {
    let btn_color = use_memo(move || if *disabled.read() { "rgba(0,0,0,0.3)" } else { "rgba(0,0,0,1)" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            disabled: *disabled.read(),
            title: "{label}",
            style: "
                width: 32px;
                height: 32px;
                background: white;
                border-radius: 8px;
                padding: 4px;
                box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.16);
                cursor: {btn_cursor};
            ",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 22px; height: 22px; color: {btn_color};" }
        }
    }
}
