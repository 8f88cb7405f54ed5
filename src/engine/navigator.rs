//! Focus Navigator - which cell gets focus after a state change.
//!
//! There is no stored "current state": each transition is a pure function
//! of the step just performed and the store it left behind. The result is
//! a focus request for the host (`Some(index)`) or `None` to leave focus
//! where it is.

use super::store::CellStore;

/// The step the navigator is reacting to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavStep {
    /// A single character was accepted at `index`.
    Entry { index: usize },
    /// Backspace at `index`; `was_empty` is the cell state before the key.
    Backspace { index: usize, was_empty: bool },
    Left { index: usize },
    Right { index: usize },
    Up,
    Down,
    /// `written` characters were distributed starting at `start`.
    Paste { start: usize, written: usize },
    /// The widget mounted or the store was rebuilt.
    Reset,
}

/// Compute the focus request for a step.
pub fn next_focus(step: NavStep, store: &CellStore) -> Option<usize> {
    match step {
        NavStep::Entry { .. } => Some(store.first_empty().unwrap_or(store.last_index())),
        // Non-destructive: a filled cell is cleared in place, an empty
        // cell hands focus back without touching the previous cell.
        NavStep::Backspace { index, was_empty } => {
            if was_empty {
                index.checked_sub(1)
            } else {
                None
            }
        }
        NavStep::Left { index } => index.checked_sub(1),
        NavStep::Right { index } => (index + 1 < store.len()).then_some(index + 1),
        NavStep::Up | NavStep::Down => None,
        NavStep::Paste { written: 0, .. } => None,
        NavStep::Paste { start, written } => Some((start + written).min(store.last_index())),
        NavStep::Reset => Some(0),
    }
}

/// Clamp an externally requested focus index to the store.
pub fn clamp(index: usize, store: &CellStore) -> usize {
    index.min(store.last_index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::num::NonZeroUsize;
    use test_case::test_case;

    fn store_with(cells: &[Option<char>]) -> CellStore {
        let mut store = CellStore::new(NonZeroUsize::new(cells.len()).unwrap());
        for (i, c) in cells.iter().enumerate() {
            if let Some(c) = c {
                store.set_cell(i, *c);
            }
        }
        store
    }

    #[test]
    fn test_entry_moves_to_first_empty() {
        let store = store_with(&[Some('1'), None, None, None]);
        assert_eq!(next_focus(NavStep::Entry { index: 0 }, &store), Some(1));
    }

    #[test]
    fn test_entry_returns_to_earlier_gap() {
        let store = store_with(&[None, Some('2'), Some('3'), None]);
        assert_eq!(next_focus(NavStep::Entry { index: 2 }, &store), Some(0));
    }

    #[test]
    fn test_entry_on_full_store_focuses_last() {
        let store = store_with(&[Some('1'), Some('2'), Some('3')]);
        assert_eq!(next_focus(NavStep::Entry { index: 0 }, &store), Some(2));
    }

    #[test_case(2, true, Some(1))]
    #[test_case(0, true, None)]
    #[test_case(2, false, None)]
    fn test_backspace(index: usize, was_empty: bool, expected: Option<usize>) {
        let store = store_with(&[None, None, None]);
        assert_eq!(next_focus(NavStep::Backspace { index, was_empty }, &store), expected);
    }

    #[test_case(NavStep::Left { index: 1 }, Some(0))]
    #[test_case(NavStep::Left { index: 0 }, None)]
    #[test_case(NavStep::Right { index: 1 }, Some(2))]
    #[test_case(NavStep::Right { index: 3 }, None)]
    #[test_case(NavStep::Up, None)]
    #[test_case(NavStep::Down, None)]
    #[test_case(NavStep::Reset, Some(0))]
    fn test_arrows_and_reset(step: NavStep, expected: Option<usize>) {
        let store = store_with(&[None, None, None, None]);
        assert_eq!(next_focus(step, &store), expected);
    }

    #[test_case(0, 2, Some(2))]
    #[test_case(1, 3, Some(3))]
    #[test_case(0, 4, Some(3))]
    #[test_case(2, 0, None)]
    fn test_paste(start: usize, written: usize, expected: Option<usize>) {
        let store = store_with(&[None, None, None, None]);
        assert_eq!(next_focus(NavStep::Paste { start, written }, &store), expected);
    }

    #[test]
    fn test_clamp() {
        let store = store_with(&[None, None]);
        assert_eq!(clamp(7, &store), 1);
        assert_eq!(clamp(0, &store), 0);
    }
}
