//! Mirror of the form state in the address bar.

use std::cell::RefCell;

use common::search_query::FormState;
use tracing::debug;

/// Where the serialized query goes; the browser history in the app.
pub trait Location {
    /// Push a new history entry whose query string is `query` (no leading `?`).
    fn push_query(&self, query: &str);
}

/// Remembers the query string last pushed or navigated to, so a state that
/// came from the address bar is never pushed back into it.
pub struct UrlSynchronizer<L: Location> {
    location: L,
    current: RefCell<String>,
}

impl<L: Location> UrlSynchronizer<L> {
    pub fn new(location: L) -> Self {
        Self { location, current: RefCell::new(String::new()) }
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn current_query(&self) -> String {
        self.current.borrow().clone()
    }

    /// Push `form` unless the address bar already shows it. Returns whether a
    /// history entry was added.
    pub fn sync(&self, form: &FormState) -> bool {
        let query = form.to_query_string();
        if *self.current.borrow() == query {
            return false;
        }
        debug!("push query ?{query}");
        self.location.push_query(&query);
        *self.current.borrow_mut() = query;
        true
    }

    /// Record a query string the user navigated to and parse it.
    pub fn accept_navigation(&self, query: &str) -> FormState {
        let form = FormState::from_query_string(query);
        *self.current.borrow_mut() = form.to_query_string();
        form
    }
}
