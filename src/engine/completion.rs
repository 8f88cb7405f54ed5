//! Completion Notifier - detects the transition into "every cell filled".
//!
//! The notifier reports a value on every transition into completion,
//! including complete -> complete with a different value. Writing the
//! same character over itself in a complete set is not a new completion.

use tracing::debug;

use super::store::CellStore;

#[derive(Debug, Clone, Default)]
pub struct CompletionNotifier {
    /// Value last reported while the store stayed complete.
    last: Option<String>,
}

impl CompletionNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the store after a content edit. Returns the value to report.
    pub fn observe(&mut self, store: &CellStore) -> Option<String> {
        if !store.is_complete() {
            self.last = None;
            return None;
        }

        let value = store.joined();
        if self.last.as_deref() == Some(value.as_str()) {
            return None;
        }

        debug!(len = value.chars().count(), "cells complete");
        self.last = Some(value.clone());
        Some(value)
    }

    /// Track a removal (backspace). Never reports.
    pub fn observe_removal(&mut self, store: &CellStore) {
        if !store.is_complete() {
            self.last = None;
        }
    }

    /// Treat the current store as already reported (prefilled values).
    pub fn prime(&mut self, store: &CellStore) {
        self.last = store.is_complete().then(|| store.joined());
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::num::NonZeroUsize;

    fn store(n: usize) -> CellStore {
        CellStore::new(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn test_reports_once_on_completion() {
        let mut s = store(2);
        let mut n = CompletionNotifier::new();

        s.set_cell(0, '1');
        assert_eq!(n.observe(&s), None);
        s.set_cell(1, '2');
        assert_eq!(n.observe(&s), Some("12".to_string()));
        assert_eq!(n.observe(&s), None);
    }

    #[test]
    fn test_refires_on_changed_complete_value() {
        let mut s = store(2);
        let mut n = CompletionNotifier::new();
        s.set_cell(0, '1');
        s.set_cell(1, '2');
        assert!(n.observe(&s).is_some());

        s.set_cell(1, '2');
        assert_eq!(n.observe(&s), None);

        s.set_cell(1, '3');
        assert_eq!(n.observe(&s), Some("13".to_string()));
    }

    #[test]
    fn test_removal_rearms() {
        let mut s = store(1);
        let mut n = CompletionNotifier::new();
        s.set_cell(0, '1');
        assert!(n.observe(&s).is_some());

        s.clear_cell(0);
        n.observe_removal(&s);
        s.set_cell(0, '1');
        assert_eq!(n.observe(&s), Some("1".to_string()));
    }

    #[test]
    fn test_prime_suppresses_identical_value() {
        let mut s = store(1);
        s.set_cell(0, '4');
        let mut n = CompletionNotifier::new();
        n.prime(&s);
        assert_eq!(n.observe(&s), None);
    }
}
