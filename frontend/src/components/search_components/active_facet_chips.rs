//! Chips for every active filter, each removable, plus "Clear all".

use common::{facets::facet_label, search_query::RangeBound};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};
use search_state::SearchAction;

use crate::data_definitions::search_context::SearchContext;

#[derive(Debug, Clone, PartialEq)]
struct Chip {
    label: String,
    remove: SearchAction,
}

#[component]
pub fn ActiveFacetChips() -> Element {
    let SearchContext { state, dispatch } = use_context::<SearchContext>();
    let chips = use_memo(move || {
        let state = state.read();
        let choices = state.facets().active_choices().into_iter().map(|choice| Chip {
            label: format!("{}: {}", facet_label(&choice.facet), choice.value),
            remove: SearchAction::toggle(choice.facet.clone(), choice.value.clone()),
        });
        let ranges = state.facets().ranges().flat_map(|range| {
            [(RangeBound::Min, "from"), (RangeBound::Max, "to")].into_iter().filter_map(move |(bound, word)| {
                range.get(bound).map(|value| Chip {
                    label: format!("{} {word} {value}", facet_label(&range.facet)),
                    remove: SearchAction::edit_range(range.facet.clone(), bound, None),
                })
            })
        });
        choices.chain(ranges).collect::<Vec<_>>()
    });

    if chips.read().is_empty() {
        return rsx! {};
    }
    rsx! {
        div {
            id: "x-active-facet-chips",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 8px;
                padding: 6px;
            ",
            for chip in chips.read().iter().cloned() {
                div {
                    key: "{chip.label}",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        border: 1px solid rgba(0,0,255,0.6);
                        border-radius: 1000px;
                        padding: 2px 6px 2px 12px;
                        background-color: white;
                        font-size: 14px;
                    ",
                    "{chip.label}"
                    button {
                        style: "border: none; background: none; cursor: pointer; display: flex;",
                        title: "Remove",
                        onclick: move |_| dispatch(chip.remove.clone()),
                        Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
                    }
                }
            }
            button {
                style: "border: none; background: none; cursor: pointer; color: blue; font-size: 14px;",
                onclick: move |_| dispatch(SearchAction::ClearAllFacets),
                "Clear all"
            }
        }
    }
}
