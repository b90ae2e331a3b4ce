use std::rc::Rc;

use dioxus::prelude::*;
use search_state::{SearchAction, SearchState};

use crate::{
    api::search_api::{GlooTimer, archive_client},
    components::{
        error_boundary::ComponentErrorBoundary,
        search_components::{
            active_facet_chips::ActiveFacetChips, search_input_top_bar::SearchInputTopBar,
            search_panel_left_view::SearchPanelLeftView, search_result_list_controls::SearchResultListControls,
            search_results_view::SearchResultsView,
        },
    },
    data_definitions::{
        search_context::{AppOrchestrator, RouterLocation, SearchContext, SharedSearchState},
        url_param::SearchUrlQuery,
    },
};


/// Books search page
#[component]
pub fn SearchPage(query: SearchUrlQuery) -> Element {
    rsx! {
        SearchPageRootComponent { query }
    }
}

#[component]
fn SearchPageRootComponent(query: ReadSignal<SearchUrlQuery>) -> Element {
    let state = use_signal(SearchState::new);
    let navigator = navigator();
    let orchestrator = use_hook(move || {
        Rc::new(AppOrchestrator::new(SharedSearchState(state), archive_client(), RouterLocation(navigator), GlooTimer))
    });
    let dispatch = use_callback(move |action: SearchAction| {
        let orchestrator = orchestrator.clone();
        spawn(async move {
            orchestrator.dispatch(action).await;
        });
    });
    use_context_provider(move || SearchContext { state: state.into(), dispatch });

    // every address-bar change, including the first render and our own pushes
    use_effect(move || {
        let query = query.read().0.clone();
        dispatch(SearchAction::Navigate(query));
    });

    let title = use_memo(move || match state.read().keyword_query() {
        Some(keyword) => format!("Books: {}", title_ellipsis(keyword)),
        None => "Books".to_string(),
    });

    rsx! {
        Title { "{title}" }
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",
                SearchInputTopBar {}
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-search-facets-left-panel",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        min-width: 320px;
                        width: 30%;
                        overflow-y: auto;
                    ",
                    ComponentErrorBoundary { SearchPanelLeftView {} }
                }
                div {
                    id: "x-search-results-right-panel",
                    style: "
                        height: 100%;
                        flex-grow: 1;
                        display: flex;
                        flex-direction: column;
                        padding: 7px;
                    ",
                    ComponentErrorBoundary {
                        ActiveFacetChips {}
                        SearchResultListControls {}
                        SearchResultsView {}
                    }
                }
            }
        }
    }
}

fn title_ellipsis(title: &str) -> String {
    if title.chars().count() > 20 {
        title.chars().take(18).collect::<String>() + "..."
    } else {
        title.to_string()
    }
}
