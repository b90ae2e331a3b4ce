//! Action layer: one method per user event.
//!
//! Each action mutates the state through a [`SearchState`] entry point, pushes
//! the resulting form state into the address bar, then refetches whatever the
//! returned [`Refresh`] marks stale. Failed fetches are logged and leave the
//! stores as they were.

use std::cell::{Cell, RefCell};

use common::search_api::SearchApi;
use common::search_const::RANGE_INPUT_DEBOUNCE_MS;
use common::search_query::{FormState, RangeBound, SortOption};
use futures_util::future::join;
use tracing::{debug, info, warn};

use crate::action::SearchAction;
use crate::debounce::{Debouncer, Timer};
use crate::search_state::{Refresh, SearchState};
use crate::state_handle::StateHandle;
use crate::url_sync::{Location, UrlSynchronizer};

type RangeEditKey = (String, RangeBound);

pub struct Orchestrator<S, A, L, T>
where
    S: StateHandle,
    A: SearchApi,
    L: Location,
    T: Timer,
{
    state: S,
    api: A,
    url: UrlSynchronizer<L>,
    timer: T,
    debounce_ms: u64,
    range_edits: RefCell<Debouncer<RangeEditKey, Option<i64>>>,
    initialized: Cell<bool>,
}

impl<S, A, L, T> Orchestrator<S, A, L, T>
where
    S: StateHandle,
    A: SearchApi,
    L: Location,
    T: Timer,
{
    pub fn new(state: S, api: A, location: L, timer: T) -> Self {
        Self {
            state,
            api,
            url: UrlSynchronizer::new(location),
            timer,
            debounce_ms: RANGE_INPUT_DEBOUNCE_MS,
            range_edits: RefCell::new(Debouncer::new()),
            initialized: Cell::new(false),
        }
    }

    pub fn with_debounce(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn url(&self) -> &UrlSynchronizer<L> {
        &self.url
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// First load: take the address bar as the starting state and fetch everything.
    pub async fn initialize(&self, query: &str) {
        self.initialized.set(true);
        let form = self.url.accept_navigation(query);
        info!("initializing search from ?{}", form.to_query_string());
        self.state.update(|state| state.set_form_state(form.clone()));
        let refresh = Refresh { form, facets: true };
        self.fetch(&refresh).await;
    }

    /// The address bar changed (back/forward, or a link). The query is adopted
    /// as is and never pushed back.
    pub async fn on_navigation(&self, query: &str) {
        if !self.initialized.get() {
            self.initialize(query).await;
            return;
        }
        let form = self.url.accept_navigation(query);
        let Some(refresh) = self.state.update(|state| state.set_form_state(form)) else {
            return;
        };
        debug!("navigated to ?{}", refresh.form.to_query_string());
        self.range_edits.borrow_mut().cancel_all();
        self.fetch(&refresh).await;
    }

    /// Same as a navigation, for callers holding an already parsed state.
    pub async fn set_form_state(&self, form: FormState) {
        self.on_navigation(&form.to_query_string()).await;
    }

    /// Run one action to completion.
    pub async fn dispatch(&self, action: SearchAction) {
        match action {
            SearchAction::Navigate(query) => self.on_navigation(&query).await,
            SearchAction::ToggleFacetChoice { facet, value } => self.toggle_facet_choice(&facet, &value).await,
            SearchAction::EditRange { facet, bound, value } => self.edit_range(&facet, bound, value).await,
            SearchAction::CancelRangeEdit { facet, bound } => self.cancel_range_edit(&facet, bound),
            SearchAction::ClearAllFacets => self.clear_all_facets().await,
            SearchAction::SetKeywordQuery(query) => self.set_keyword_query(&query).await,
            SearchAction::ChangeSort(sort) => self.change_sort(sort).await,
            SearchAction::GoToPage(page) => self.go_to_page(page).await,
            SearchAction::NextPage => self.next_page().await,
            SearchAction::PreviousPage => self.previous_page().await,
        }
    }

    pub async fn toggle_facet_choice(&self, facet: &str, value: &str) {
        debug!("toggle {facet}={value:?}");
        let refresh = self.state.update(|state| state.toggle_facet_choice(facet, value));
        self.apply(refresh).await;
    }

    pub async fn edit_range_min(&self, facet: &str, value: Option<i64>) {
        self.edit_range(facet, RangeBound::Min, value).await;
    }

    pub async fn edit_range_max(&self, facet: &str, value: Option<i64>) {
        self.edit_range(facet, RangeBound::Max, value).await;
    }

    /// Debounced: the edit only applies if no newer edit of the same bound
    /// arrives within the window.
    pub async fn edit_range(&self, facet: &str, bound: RangeBound, value: Option<i64>) {
        let key = (facet.to_string(), bound);
        let ticket = self.range_edits.borrow_mut().push(key.clone(), value);
        self.timer.sleep_ms(self.debounce_ms).await;
        let Some(value) = self.range_edits.borrow_mut().take(&key, ticket) else {
            return;
        };
        debug!("range {facet} {bound:?} -> {value:?}");
        let refresh = self.state.update(|state| state.edit_range(facet, bound, value));
        self.apply(refresh).await;
    }

    /// Forget a range edit still waiting out the window; the applied bound stays.
    pub fn cancel_range_edit(&self, facet: &str, bound: RangeBound) {
        debug!("range {facet} {bound:?} edit cancelled");
        self.range_edits.borrow_mut().cancel(&(facet.to_string(), bound));
    }

    pub async fn clear_all_facets(&self) {
        debug!("clear all facets");
        self.range_edits.borrow_mut().cancel_all();
        let refresh = self.state.update(SearchState::clear_all_facets);
        self.apply(Some(refresh)).await;
    }

    pub async fn set_keyword_query(&self, query: &str) {
        debug!("keyword {query:?}");
        let refresh = self.state.update(|state| state.set_keyword_query(query));
        self.apply(Some(refresh)).await;
    }

    pub async fn change_sort(&self, sort: SortOption) {
        debug!("sort {sort}");
        let refresh = self.state.update(|state| state.change_sort(sort));
        self.apply(refresh).await;
    }

    pub async fn go_to_page(&self, page: u32) {
        let refresh = self.state.update(|state| state.go_to_page(page));
        self.apply(refresh).await;
    }

    pub async fn next_page(&self) {
        let refresh = self.state.update(SearchState::next_page);
        self.apply(refresh).await;
    }

    pub async fn previous_page(&self) {
        let refresh = self.state.update(SearchState::previous_page);
        self.apply(refresh).await;
    }

    async fn apply(&self, refresh: Option<Refresh>) {
        let Some(refresh) = refresh else {
            return;
        };
        self.url.sync(&refresh.form);
        self.fetch(&refresh).await;
    }

    async fn fetch(&self, refresh: &Refresh) {
        if refresh.facets {
            join(self.refresh_facets(refresh), self.refresh_results(refresh)).await;
        } else {
            self.refresh_results(refresh).await;
        }
    }

    async fn refresh_facets(&self, refresh: &Refresh) {
        match self.api.fetch_facets(&refresh.form).await {
            Ok(payload) => self.state.update(|state| state.commit_facets(&payload)),
            Err(e) => warn!("facets fetch failed, keeping previous counts: {e:#}"),
        }
    }

    async fn refresh_results(&self, refresh: &Refresh) {
        match self.api.fetch_results(&refresh.form).await {
            Ok(page) => self.state.update(|state| state.commit_results(page)),
            Err(e) => warn!("results fetch failed, keeping previous page: {e:#}"),
        }
    }
}
