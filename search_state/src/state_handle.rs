//! Shared access to the single [`SearchState`] owned by the UI.

use std::cell::RefCell;
use std::rc::Rc;

use crate::search_state::SearchState;

/// Handle the orchestrator reads and commits through.
///
/// `update` must not be re-entered from inside the closure.
pub trait StateHandle {
    fn read<R>(&self, f: impl FnOnce(&SearchState) -> R) -> R;
    fn update<R>(&self, f: impl FnOnce(&mut SearchState) -> R) -> R;
}

impl StateHandle for Rc<RefCell<SearchState>> {
    fn read<R>(&self, f: impl FnOnce(&SearchState) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut SearchState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
