//! Binding of the search state machinery to Dioxus signals and the router.

use backend::ArchiveClient;
use dioxus::prelude::*;
use dioxus::router::Navigator;
use search_state::state_handle::StateHandle;
use search_state::url_sync::Location;
use search_state::{Orchestrator, SearchAction, SearchState};

use crate::api::search_api::GlooTimer;
use crate::routes::Route;

pub type AppOrchestrator = Orchestrator<SharedSearchState, ArchiveClient, RouterLocation, GlooTimer>;

/// The page's [`SearchState`] signal, seen by the orchestrator as a plain handle.
/// Reads do not subscribe; components read the signal themselves.
#[derive(Clone, Copy)]
pub struct SharedSearchState(pub Signal<SearchState>);

impl StateHandle for SharedSearchState {
    fn read<R>(&self, f: impl FnOnce(&SearchState) -> R) -> R {
        f(&*self.0.peek())
    }

    fn update<R>(&self, f: impl FnOnce(&mut SearchState) -> R) -> R {
        let mut signal = self.0;
        let mut state = signal.write();
        f(&mut *state)
    }
}

/// Pushes history entries through the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterLocation(pub Navigator);

impl Location for RouterLocation {
    fn push_query(&self, query: &str) {
        self.0.push(Route::search_page_from_query(query));
    }
}

/// Provided by the search page to every search component.
#[derive(Clone, Copy)]
pub struct SearchContext {
    pub state: ReadSignal<SearchState>,
    pub dispatch: Callback<SearchAction>,
}
