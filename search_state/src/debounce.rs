//! Trailing-edge debounce for rapid edits.
//!
//! Every edit is stored under its key with a fresh ticket. The caller sleeps
//! for the debounce window and then tries to take the edit back with its ticket;
//! only the last edit made for a key inside the window still holds a matching
//! ticket, so only that one goes through.

use std::collections::BTreeMap;

/// Sleeps for the debounce window; tokio in tests, browser timers in the app.
#[allow(async_fn_in_trait)]
pub trait Timer {
    async fn sleep_ms(&self, ms: u64);
}

#[derive(Debug)]
pub struct Debouncer<K: Ord, V> {
    pending: BTreeMap<K, (u64, V)>,
    next_ticket: u64,
}

impl<K: Ord, V> Default for Debouncer<K, V> {
    fn default() -> Self {
        Self { pending: BTreeMap::new(), next_ticket: 0 }
    }
}

impl<K: Ord, V> Debouncer<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` as the latest edit for `key`, superseding any earlier one.
    pub fn push(&mut self, key: K, value: V) -> u64 {
        self.next_ticket += 1;
        self.pending.insert(key, (self.next_ticket, value));
        self.next_ticket
    }

    /// Take the pending edit for `key` if `ticket` is still the latest.
    pub fn take(&mut self, key: &K, ticket: u64) -> Option<V> {
        match self.pending.get(key) {
            Some((latest, _)) if *latest == ticket => self.pending.remove(key).map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.pending.contains_key(key)
    }

    /// Drop the pending edit for `key`, if any.
    pub fn cancel(&mut self, key: &K) {
        self.pending.remove(key);
    }

    /// Drop every pending edit.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_takes_the_value() {
        let mut debounce = Debouncer::new();
        let first = debounce.push("pub_year_0", 1700);
        let second = debounce.push("pub_year_0", 1720);

        assert_eq!(debounce.take(&"pub_year_0", first), None);
        assert!(debounce.is_pending(&"pub_year_0"));
        assert_eq!(debounce.take(&"pub_year_0", second), Some(1720));
        assert!(!debounce.is_pending(&"pub_year_0"));
        assert_eq!(debounce.take(&"pub_year_0", second), None);
    }

    #[test]
    fn keys_are_independent() {
        let mut debounce = Debouncer::new();
        let min = debounce.push("pub_year_0", 1700);
        let max = debounce.push("pub_year_1", 1800);

        assert_eq!(debounce.take(&"pub_year_1", max), Some(1800));
        assert_eq!(debounce.take(&"pub_year_0", min), Some(1700));
    }

    #[test]
    fn cancel_drops_pending_edits() {
        let mut debounce = Debouncer::new();
        let ticket = debounce.push("pub_year_0", 1700);
        debounce.cancel_all();
        assert_eq!(debounce.take(&"pub_year_0", ticket), None);
    }

    #[test]
    fn cancel_only_touches_its_key() {
        let mut debounce = Debouncer::new();
        let min = debounce.push("pub_year_0", 1700);
        let max = debounce.push("pub_year_1", 1800);
        debounce.cancel(&"pub_year_0");
        assert_eq!(debounce.take(&"pub_year_0", min), None);
        assert_eq!(debounce.take(&"pub_year_1", max), Some(1800));
    }
}
