//! Paste Distributor - spreads multi-character input across cells.
//!
//! Input arrives already sanitized by the acceptance filter. The
//! distributor only decides where writing starts and how much fits.

use tracing::trace;

use super::store::CellStore;
use crate::types::PasteAnchor;

/// Where a distribution wrote, for the focus navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    pub start: usize,
    pub written: usize,
}

/// Writes sanitized characters one per consecutive cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasteDistributor {
    anchor: PasteAnchor,
}

impl PasteDistributor {
    pub fn new(anchor: PasteAnchor) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> PasteAnchor {
        self.anchor
    }

    /// Distribute a paste targeted at `target`, honoring the anchor.
    pub fn paste(&self, store: &mut CellStore, target: usize, chars: &[char]) -> Distribution {
        let start = match self.anchor {
            PasteAnchor::FocusedCell => target,
            PasteAnchor::FirstCell => 0,
        };
        self.distribute(store, start, chars)
    }

    /// Write `chars` from `start`, dropping whatever does not fit.
    pub fn distribute(&self, store: &mut CellStore, start: usize, chars: &[char]) -> Distribution {
        let start = start.min(store.last_index());
        let room = store.len() - start;
        let taken = &chars[..chars.len().min(room)];

        for (offset, &c) in taken.iter().enumerate() {
            store.set_cell(start + offset, c);
        }

        trace!(start, written = taken.len(), dropped = chars.len() - taken.len(), "distributed");
        Distribution {
            start,
            written: taken.len(),
        }
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
    fn test_distribute_from_target() {
        let mut s = store(4);
        let d = PasteDistributor::default().paste(&mut s, 1, &['5', '6']);
        assert_eq!(d, Distribution { start: 1, written: 2 });
        assert_eq!(s.values(), vec!["", "5", "6", ""]);
    }

    #[test]
    fn test_truncates_to_remaining_cells() {
        let mut s = store(4);
        let d = PasteDistributor::default().paste(&mut s, 2, &['1', '2', '3', '4']);
        assert_eq!(d.written, 2);
        assert_eq!(s.values(), vec!["", "", "1", "2"]);
    }

    #[test]
    fn test_first_cell_anchor_ignores_target() {
        let mut s = store(4);
        s.set_cell(3, '9');
        let d = PasteDistributor::new(PasteAnchor::FirstCell).paste(&mut s, 3, &['1', '2', '3', '4', '5']);
        assert_eq!(d, Distribution { start: 0, written: 4 });
        assert_eq!(s.joined(), "1234");
    }

    #[test]
    fn test_empty_paste_writes_nothing() {
        let mut s = store(3);
        s.set_cell(0, '1');
        let d = PasteDistributor::default().paste(&mut s, 0, &[]);
        assert_eq!(d.written, 0);
        assert_eq!(s.joined(), "1");
    }
}
