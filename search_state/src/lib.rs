//! Client-side faceted search state: stores, address-bar sync and the action
//! layer that keeps them consistent with the remote index.

pub mod action;
pub mod facet_store;
pub mod results_store;
pub mod search_state;
pub mod state_handle;
pub mod url_sync;
pub mod debounce;
pub mod orchestrator;
pub mod pagination;
pub mod facet_filter;

pub use action::SearchAction;
pub use orchestrator::Orchestrator;
pub use search_state::{Refresh, SearchState};
