use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};
use search_state::SearchAction;

use crate::data_definitions::search_context::SearchContext;


#[component]
pub fn SearchInputTopBar() -> Element {
    let SearchContext { state, dispatch } = use_context::<SearchContext>();
    let committed_keyword = use_memo(move || state.read().keyword_query().unwrap_or_default().to_string());
    let mut draft_keyword = use_signal(|| committed_keyword.peek().clone());
    // navigation replaces the committed keyword; the draft has to follow it
    use_effect(move || {
        draft_keyword.set(committed_keyword());
    });
    let keyword_has_changed = use_memo(move || draft_keyword.read().trim() != committed_keyword.read().as_str());
    let search_button_color = use_memo(move || if keyword_has_changed() { "blue" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        dispatch(SearchAction::SetKeywordQuery(draft_keyword.read().clone()));
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| trigger_search(()),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "search",
                placeholder: "Search books by keyword",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{draft_keyword}",
                oninput: move |event: Event<FormData>| draft_keyword.set(event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        trigger_search(());
                    }
                },
            }
        }
    }
}
