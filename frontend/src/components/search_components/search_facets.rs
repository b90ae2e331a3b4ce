use common::{facets::FacetChoice, search_query::RangeBound};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};
use search_state::{SearchAction, facet_filter::{ChoiceFilter, rolodex}};

use crate::data_definitions::search_context::SearchContext;


#[component]
pub fn TextFacetPanel(facet_name: ReadSignal<String>) -> Element {
    let SearchContext { state, .. } = use_context::<SearchContext>();
    let mut filter = use_signal(ChoiceFilter::default);
    let choices = use_memo(move || {
        let state = state.read();
        let facet_name = facet_name.read();
        filter.read()
            .apply(state.facets().choices_for(&facet_name))
            .into_iter()
            .cloned()
            .collect::<Vec<FacetChoice>>()
    });
    let selected_letter = use_memo(move || filter.read().letter);

    rsx! {
        input {
            r#type: "text",
            placeholder: "Filter values",
            style: "
                width: 100%;
                border: 1px solid rgba(0,0,0,0.3);
                border-radius: 6px;
                padding: 4px 8px;
                font-size: 15px;
            ",
            value: "{filter.read().text}",
            oninput: move |event: Event<FormData>| filter.write().text = event.value(),
        }
        div {
            class: "x-facet-rolodex",
            style: "display: flex; flex-wrap: wrap; gap: 2px; margin: 6px 0;",
            for letter in rolodex() {
                button {
                    key: "{letter}",
                    style: "
                        cursor: pointer;
                        border: none;
                        font-size: 12px;
                        padding: 2px 4px;
                        font-weight: {letter_weight(selected_letter() == Some(letter))};
                        background: none;
                    ",
                    onclick: move |_| filter.write().toggle_letter(letter),
                    "{letter}"
                }
            }
        }
        if choices.read().is_empty() {
            div { style: "color: rgba(0,0,0,0.5); padding: 4px;", "No matching values" }
        }
        ul {
            style: "max-height: 320px; overflow-y: auto;",
            for choice in choices.read().iter().cloned() {
                li {
                    key: "{choice.facet}-{choice.value}",
                    FacetCheckbox { choice }
                }
            }
        }
    }
}

fn letter_weight(selected: bool) -> u32 {
    if selected { 700 } else { 400 }
}


#[component]
fn FacetCheckbox(choice: ReadSignal<FacetChoice>) -> Element {
    let SearchContext { dispatch, .. } = use_context::<SearchContext>();
    let FacetChoice { facet, value, count, active } = choice.read().clone();
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px;
                align-items: center;
            ",
            onclick: move |_| dispatch(SearchAction::toggle(facet.clone(), value.clone())),

            if active {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 22px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{choice.read().value}"
            }
            div { style: "flex: 1 1 auto;", }
            div {
                style: "
                    font-size: 16px;
                    line-height: 22px;
                    color: rgba(28, 33, 45, 0.7);
                    flex-shrink: 0;
                ",
                "{count}"
            }
        }
    }
}


#[component]
pub fn RangeFacetPanel(facet_name: ReadSignal<String>) -> Element {
    let SearchContext { state, .. } = use_context::<SearchContext>();
    let limits = use_memo(move || state.read().facets().range_limits(&facet_name.read()));
    let bounds = use_memo(move || {
        state.read().facets().range(&facet_name.read()).map(|range| range.bounds()).unwrap_or_default()
    });
    let (low, high) = match limits() {
        Some((low, high)) => (low.to_string(), high.to_string()),
        None => (String::new(), String::new()),
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
            RangeBoundInput { facet_name, bound: RangeBound::Min, current: bounds().min, low: low.clone(), high: high.clone() }
            span { "to" }
            RangeBoundInput { facet_name, bound: RangeBound::Max, current: bounds().max, low, high }
        }
    }
}

#[component]
fn RangeBoundInput(
    facet_name: ReadSignal<String>,
    bound: RangeBound,
    #[props(!optional)] current: Option<i64>,
    low: String,
    high: String,
) -> Element {
    let SearchContext { dispatch, .. } = use_context::<SearchContext>();
    let placeholder = match bound {
        RangeBound::Min => low.clone(),
        RangeBound::Max => high.clone(),
    };
    rsx! {
        input {
            r#type: "number",
            style: "
                width: 100px;
                border: 1px solid rgba(0,0,0,0.3);
                border-radius: 6px;
                padding: 4px 8px;
                font-size: 15px;
            ",
            min: "{low}",
            max: "{high}",
            placeholder: "{placeholder}",
            value: current.map(|v| v.to_string()).unwrap_or_default(),
            // typing is debounced by the orchestrator
            oninput: move |event: Event<FormData>| {
                let facet = facet_name.read().clone();
                match parse_bound(&event.value()) {
                    Some(value) => dispatch(SearchAction::edit_range(facet, bound, value)),
                    None => dispatch(SearchAction::cancel_range_edit(facet, bound)),
                }
            },
        }
    }
}

/// `Some(None)` for an empty box, `None` for text that is not a whole number.
fn parse_bound(text: &str) -> Option<Option<i64>> {
    let text = text.trim();
    if text.is_empty() {
        return Some(None);
    }
    text.parse::<i64>().ok().map(Some)
}


#[cfg(test)]
mod tests {
    use super::parse_bound;

    #[test]
    fn bound_input_parsing() {
        assert_eq!(parse_bound(" 1720 "), Some(Some(1720)));
        assert_eq!(parse_bound(""), Some(None));
        assert_eq!(parse_bound("17.5"), None);
    }
}
