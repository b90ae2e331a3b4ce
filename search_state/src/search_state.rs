//! Application state object: the facet and results stores plus keyword, sort and page.
//!
//! Every mutation goes through one of the methods below. Each returns the
//! [`Refresh`] the change calls for, or `None` when nothing changed and no
//! fetch or address-bar update is due.

use common::search_query::{FormState, RangeBound, SortOption};
use common::search_result::{FacetsResponse, ResultsPage};
use tracing::warn;

use crate::facet_store::FacetStore;
use crate::results_store::ResultsStore;


/// What one state change made stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    /// Form state right after the change.
    pub form: FormState,
    /// Facet counts must be refetched along with the results.
    pub facets: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    facets: FacetStore,
    results: ResultsStore,
    keyword_query: Option<String>,
    sort: SortOption,
    page: u32,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            facets: FacetStore::default(),
            results: ResultsStore::default(),
            keyword_query: None,
            sort: SortOption::default(),
            page: 1,
        }
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facets(&self) -> &FacetStore {
        &self.facets
    }

    pub fn results(&self) -> &ResultsStore {
        &self.results
    }

    pub fn keyword_query(&self) -> Option<&str> {
        self.keyword_query.as_deref()
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Projection of the stores; recomputed on every call.
    pub fn form_state(&self) -> FormState {
        FormState {
            active_choices: self.facets.active_choice_map(),
            active_ranges: self.facets.active_range_map(),
            keyword_query: self.keyword_query.clone(),
            sort: self.sort,
            page: self.page,
        }
    }

    fn refresh(&self, facets: bool) -> Refresh {
        Refresh { form: self.form_state(), facets }
    }

    pub fn toggle_facet_choice(&mut self, facet: &str, value: &str) -> Option<Refresh> {
        let before = self.facets.active_facet_names();
        if self.facets.toggle(facet, value).is_none() {
            warn!("toggle of unknown facet choice {facet}={value:?} ignored");
            return None;
        }
        self.page = 1;
        let facets = self.facets.active_facet_names() != before;
        Some(self.refresh(facets))
    }

    pub fn edit_range(&mut self, facet: &str, bound: RangeBound, value: Option<i64>) -> Option<Refresh> {
        let before = self.facets.active_facet_names();
        match self.facets.edit_range(facet, bound, value) {
            None => {
                warn!("range edit on unknown range facet {facet} ignored");
                return None;
            }
            Some(false) => return None,
            Some(true) => {}
        }
        self.page = 1;
        let facets = self.facets.active_facet_names() != before;
        Some(self.refresh(facets))
    }

    pub fn clear_all_facets(&mut self) -> Refresh {
        self.facets.clear_all();
        self.page = 1;
        self.refresh(true)
    }

    /// An empty keyword leaves nothing to rank by, so relevance sort falls back
    /// to the default order.
    pub fn set_keyword_query(&mut self, query: &str) -> Refresh {
        let query = query.trim();
        self.keyword_query = (!query.is_empty()).then(|| query.to_string());
        if self.keyword_query.is_none() && self.sort.requires_keyword() {
            self.sort = SortOption::default();
        }
        self.page = 1;
        self.refresh(true)
    }

    pub fn change_sort(&mut self, sort: SortOption) -> Option<Refresh> {
        if sort == self.sort {
            return None;
        }
        if sort.requires_keyword() && self.keyword_query.is_none() {
            warn!("sort {sort} needs a keyword query, ignored");
            return None;
        }
        self.sort = sort;
        self.page = 1;
        Some(self.refresh(false))
    }

    /// Pages outside `1..=total_pages`, and the current page, are ignored.
    pub fn go_to_page(&mut self, page: u32) -> Option<Refresh> {
        if page < 1 || page > self.results.total_pages() || page == self.page {
            return None;
        }
        self.page = page;
        Some(self.refresh(false))
    }

    pub fn next_page(&mut self) -> Option<Refresh> {
        self.go_to_page(self.page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> Option<Refresh> {
        self.go_to_page(self.page.saturating_sub(1))
    }

    /// Make the stores match an externally supplied state. Commits only when it
    /// differs from the current projection. Relevance sort without a keyword
    /// falls back to the default order, as in [`Self::set_keyword_query`].
    pub fn set_form_state(&mut self, mut form: FormState) -> Option<Refresh> {
        form.keyword_query = form.keyword_query.filter(|query| !query.trim().is_empty());
        if !form.has_keyword() && form.sort.requires_keyword() {
            form.sort = SortOption::default();
        }
        form.page = form.page.max(1);
        let current = self.form_state();
        if current == form {
            return None;
        }
        let facets = current.active_facet_names() != form.active_facet_names()
            || current.keyword_query != form.keyword_query;
        self.facets.set_active_choices(&form.active_choices);
        self.facets.set_ranges(&form.active_ranges);
        self.keyword_query = form.keyword_query;
        self.sort = form.sort;
        self.page = form.page;
        Some(self.refresh(facets))
    }

    /// Store a facets payload: the first one populates the catalogue, later ones
    /// only refresh counts.
    pub fn commit_facets(&mut self, payload: &FacetsResponse) {
        if self.facets.is_loaded() {
            self.facets.update_facet_choice_counts(payload);
        } else {
            self.facets.add_facets(payload);
        }
    }

    /// A page past the end of the result set (typed into the address bar) is
    /// pulled back to the last page once the page count is known.
    pub fn commit_results(&mut self, page: ResultsPage) {
        self.results.update(page);
        let total_pages = self.results.total_pages();
        if total_pages > 0 && self.page > total_pages {
            warn!("page {} is past the last page, showing page {total_pages}", self.page);
            self.page = total_pages;
        }
    }
}


#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use common::search_query::RangeBounds;

    use super::*;

    const AUTHORS: [&str; 4] = ["Biancani, Giuseppe", "Copus, Martinus", "Rous, Francis, 1615-", "Sira, Ben"];
    const LANGUAGES: [&str; 2] = ["English", "Latin"];

    fn loaded_state(total_pages: u32) -> SearchState {
        let mut payload = FacetsResponse { total: 30, ..FacetsResponse::default() };
        payload.facets.insert("author".into(), AUTHORS.iter().map(|a| (a.to_string(), 3)).collect());
        payload.facets.insert("language".into(), LANGUAGES.iter().map(|l| (l.to_string(), 15)).collect());
        payload.range_facets.insert("pub_year".into(), BTreeMap::from([("1765".to_string(), 5), ("1843".to_string(), 9)]));
        let mut state = SearchState::new();
        state.commit_facets(&payload);
        state.commit_results(ResultsPage { total_results: 30, total_pages, content: String::new(), page: 1 });
        state
    }

    #[test]
    fn active_choices_are_those_toggled_an_odd_number_of_times() {
        let choices = AUTHORS.iter().map(|a| ("author", *a))
            .chain(LANGUAGES.iter().map(|l| ("language", *l)))
            .collect::<Vec<_>>();
        let mut state = loaded_state(1);
        let mut toggles = vec![0_u32; choices.len()];
        let mut seed = 0x2545_f491_u64;
        for _ in 0..200 {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let index = (seed >> 33) as usize % choices.len();
            let (facet, value) = choices[index];
            state.toggle_facet_choice(facet, value);
            toggles[index] += 1;
        }

        let mut expected = BTreeMap::<String, BTreeSet<String>>::new();
        for ((facet, value), count) in choices.iter().zip(&toggles) {
            if count % 2 == 1 {
                expected.entry(facet.to_string()).or_default().insert(value.to_string());
            }
        }
        assert_eq!(state.form_state().active_choices, expected);
    }

    #[test]
    fn facets_refresh_only_when_active_facet_names_change() {
        let mut state = loaded_state(1);

        let first = state.toggle_facet_choice("author", "Sira, Ben").unwrap();
        assert!(first.facets);

        let second = state.toggle_facet_choice("author", "Copus, Martinus").unwrap();
        assert!(!second.facets);

        let other = state.toggle_facet_choice("language", "Latin").unwrap();
        assert!(other.facets);

        state.toggle_facet_choice("author", "Sira, Ben");
        let last_author = state.toggle_facet_choice("author", "Copus, Martinus").unwrap();
        assert!(last_author.facets);
        assert_eq!(last_author.form.active_choices.keys().collect::<Vec<_>>(), vec!["language"]);
    }

    #[test]
    fn range_edits_follow_the_same_refresh_rule() {
        let mut state = loaded_state(1);
        assert!(state.edit_range("pub_year", RangeBound::Min, Some(1700)).unwrap().facets);
        assert!(!state.edit_range("pub_year", RangeBound::Max, Some(1800)).unwrap().facets);
        assert_eq!(state.edit_range("pub_year", RangeBound::Max, Some(1800)), None);
        assert_eq!(state.edit_range("language", RangeBound::Max, Some(1800)), None);
        assert_eq!(
            state.form_state().active_ranges["pub_year"],
            RangeBounds { min: Some(1700), max: Some(1800) }
        );
    }

    #[test]
    fn clear_all_empties_choices_and_ranges() {
        let mut state = loaded_state(3);
        state.toggle_facet_choice("author", "Sira, Ben");
        state.edit_range("pub_year", RangeBound::Max, Some(1800));
        state.go_to_page(2);

        let refresh = state.clear_all_facets();

        assert!(refresh.facets);
        assert!(refresh.form.active_choices.is_empty());
        assert!(refresh.form.active_ranges.is_empty());
        assert!(state.facets().ranges().all(|range| range.min_val.is_none() && range.max_val.is_none()));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn clearing_keyword_resets_relevance_sort() {
        let mut state = loaded_state(1);
        state.set_keyword_query("psalms");
        assert!(state.change_sort(SortOption::Relevance).is_some());

        let refresh = state.set_keyword_query("   ");

        assert!(refresh.facets);
        assert_eq!(state.sort(), SortOption::AuthorAsc);
        assert_eq!(state.keyword_query(), None);
    }

    #[test]
    fn clearing_keyword_keeps_other_sorts() {
        let mut state = loaded_state(1);
        state.set_keyword_query("psalms");
        state.change_sort(SortOption::PubYearDesc);
        state.set_keyword_query("");
        assert_eq!(state.sort(), SortOption::PubYearDesc);
    }

    #[test]
    fn relevance_needs_a_keyword() {
        let mut state = loaded_state(1);
        assert_eq!(state.change_sort(SortOption::Relevance), None);
        assert_eq!(state.sort(), SortOption::AuthorAsc);
    }

    #[test]
    fn sort_change_refreshes_results_only_and_resets_page() {
        let mut state = loaded_state(4);
        state.go_to_page(3);
        let refresh = state.change_sort(SortOption::PubYearAsc).unwrap();
        assert!(!refresh.facets);
        assert_eq!(refresh.form.page, 1);
        assert_eq!(state.change_sort(SortOption::PubYearAsc), None);
    }

    #[test]
    fn out_of_range_pages_are_ignored() {
        let mut state = loaded_state(5);
        assert_eq!(state.go_to_page(99), None);
        assert_eq!(state.go_to_page(0), None);
        assert_eq!(state.previous_page(), None);
        assert_eq!(state.page(), 1);

        assert_eq!(state.go_to_page(5).map(|r| r.form.page), Some(5));
        assert_eq!(state.next_page(), None);
        assert_eq!(state.page(), 5);
        assert_eq!(state.previous_page().map(|r| r.facets), Some(false));
        assert_eq!(state.page(), 4);
    }

    #[test]
    fn no_pages_before_results_arrive() {
        let mut state = SearchState::new();
        assert_eq!(state.go_to_page(1), None);
        assert_eq!(state.next_page(), None);
    }

    #[test]
    fn set_form_state_then_read_gives_the_same_state() {
        let mut state = loaded_state(1);
        state.toggle_facet_choice("author", "Sira, Ben");
        let form = FormState::from_query_string(
            "author=Herdson%2C%20Henry&language=Latin&pub_year_1=1800&query=psalter&sort=relevance&page=4",
        );

        let refresh = state.set_form_state(form.clone()).unwrap();

        assert!(refresh.facets);
        assert_eq!(state.form_state(), form);
        assert_eq!(refresh.form, form);
    }

    #[test]
    fn set_form_state_with_current_state_is_a_no_op() {
        let mut state = loaded_state(1);
        state.toggle_facet_choice("author", "Sira, Ben");
        assert_eq!(state.set_form_state(state.form_state()), None);
    }

    #[test]
    fn set_form_state_page_change_alone_skips_facets() {
        let mut state = loaded_state(1);
        let form = FormState { page: 2, ..state.form_state() };
        assert_eq!(state.set_form_state(form).map(|r| r.facets), Some(false));
    }

    #[test]
    fn huge_page_from_the_address_bar_is_clamped_once_results_arrive() {
        let mut state = SearchState::new();
        state.set_form_state(FormState::from_query_string("page=4294967295"));
        assert_eq!(state.page(), u32::MAX);
        assert_eq!(crate::pagination::pagination_window(state.page(), 5).pages, vec![1, 2, 3, 4, 5]);

        state.commit_results(ResultsPage { total_results: 100, total_pages: 5, content: String::new(), page: 5 });

        assert_eq!(state.page(), 5);
        assert_eq!(state.next_page(), None);
        assert_eq!(state.previous_page().map(|r| r.form.page), Some(4));
    }

    #[test]
    fn relevance_without_keyword_is_not_adopted() {
        let mut state = loaded_state(1);
        let form = FormState { sort: SortOption::Relevance, ..FormState::default() };

        assert_eq!(state.set_form_state(form), None);
        assert_eq!(state.sort(), SortOption::AuthorAsc);

        state.set_form_state(FormState::from_query_string("sort=relevance&page=2"));
        assert_eq!(state.sort(), SortOption::AuthorAsc);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn first_facets_payload_populates_later_ones_update_counts() {
        let mut state = loaded_state(1);
        let mut narrowed = FacetsResponse { total: 1, ..FacetsResponse::default() };
        narrowed.facets.insert("author".into(), BTreeMap::from([("Sira, Ben".to_string(), 1), ("New, Name".to_string(), 1)]));

        state.commit_facets(&narrowed);

        assert_eq!(state.facets().total_results(), Some(1));
        assert!(state.facets().choices().iter().all(|c| c.value != "New, Name"));
        assert_eq!(state.facets().choices_for("language")[0].count, 0);
    }
}
