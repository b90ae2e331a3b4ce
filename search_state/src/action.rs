//! User events as values, so a UI can hand them to the orchestrator through a
//! single dispatch callback.

use common::search_query::{RangeBound, SortOption};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    /// The address bar now shows this query string.
    Navigate(String),
    ToggleFacetChoice {
        facet: String,
        value: String,
    },
    /// Debounced; `None` clears the bound.
    EditRange {
        facet: String,
        bound: RangeBound,
        value: Option<i64>,
    },
    /// The bound's input no longer holds a number; drop its pending edit.
    CancelRangeEdit {
        facet: String,
        bound: RangeBound,
    },
    ClearAllFacets,
    SetKeywordQuery(String),
    ChangeSort(SortOption),
    GoToPage(u32),
    NextPage,
    PreviousPage,
}

impl SearchAction {
    pub fn toggle(facet: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ToggleFacetChoice { facet: facet.into(), value: value.into() }
    }

    pub fn edit_range(facet: impl Into<String>, bound: RangeBound, value: Option<i64>) -> Self {
        Self::EditRange { facet: facet.into(), bound, value }
    }

    pub fn cancel_range_edit(facet: impl Into<String>, bound: RangeBound) -> Self {
        Self::CancelRangeEdit { facet: facet.into(), bound }
    }
}
