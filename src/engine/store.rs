//! Cell Store - the ordered per-cell characters.
//!
//! Single source of truth for the widget value. Each slot is either empty
//! or exactly one `char`, so a slot can never hold more than one
//! character. The number of slots only changes through [`CellStore::reset`].

use std::num::NonZeroUsize;

/// Ordered, fixed-length sequence of single-character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellStore {
    cells: Vec<Option<char>>,
}

impl CellStore {
    /// Create an all-empty store with `count` cells.
    pub fn new(count: NonZeroUsize) -> Self {
        Self {
            cells: vec![None; count.get()],
        }
    }

    /// Rebuild the store with `count` empty cells.
    pub fn reset(&mut self, count: NonZeroUsize) {
        self.cells.clear();
        self.cells.resize(count.get(), None);
    }

    /// Empty every cell, keeping the length.
    pub fn clear_all(&mut self) {
        self.cells.fill(None);
    }

    /// Number of cells. Never zero.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Index of the last cell.
    pub fn last_index(&self) -> usize {
        self.cells.len() - 1
    }

    /// Panic unless `index` names a cell of this store.
    #[inline]
    pub fn check(&self, index: usize) {
        assert!(
            index < self.cells.len(),
            "cell index {index} out of range for {} cells",
            self.cells.len()
        );
    }

    /// Replace the content of a cell.
    pub fn set_cell(&mut self, index: usize, ch: char) {
        self.check(index);
        self.cells[index] = Some(ch);
    }

    /// Store the first character of `text`; an empty `text` clears the cell.
    pub fn set_cell_str(&mut self, index: usize, text: &str) {
        self.check(index);
        self.cells[index] = text.chars().next();
    }

    /// Empty a cell.
    pub fn clear_cell(&mut self, index: usize) {
        self.check(index);
        self.cells[index] = None;
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.check(index);
        self.cells[index]
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    /// Slot contents in order, `""` for empty slots.
    pub fn values(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|c| c.map(String::from).unwrap_or_default())
            .collect()
    }

    /// All cell contents concatenated in index order.
    pub fn joined(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// First empty cell, if any.
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Option::is_none)
    }

    /// Every cell holds a character.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// No cell holds a character.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.cells.iter().copied()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store(n: usize) -> CellStore {
        CellStore::new(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn test_new_store_is_empty() {
        let s = store(4);
        assert_eq!(s.len(), 4);
        assert!(s.is_empty());
        assert!(!s.is_complete());
        assert_eq!(s.values(), vec!["", "", "", ""]);
        assert_eq!(s.first_empty(), Some(0));
    }

    #[test]
    fn test_set_and_clear() {
        let mut s = store(3);
        s.set_cell(1, '7');
        assert_eq!(s.get(1), Some('7'));
        assert_eq!(s.values(), vec!["", "7", ""]);
        assert_eq!(s.joined(), "7");

        s.clear_cell(1);
        assert!(s.is_cell_empty(1));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_set_cell_str_truncates() {
        let mut s = store(2);
        s.set_cell_str(0, "98");
        assert_eq!(s.get(0), Some('9'));

        s.set_cell_str(0, "");
        assert_eq!(s.get(0), None);
    }

    #[test]
    fn test_complete_and_first_empty() {
        let mut s = store(2);
        s.set_cell(1, 'b');
        assert_eq!(s.first_empty(), Some(0));
        s.set_cell(0, 'a');
        assert!(s.is_complete());
        assert_eq!(s.first_empty(), None);
        assert_eq!(s.joined(), "ab");
    }

    #[test]
    fn test_reset_changes_length() {
        let mut s = store(4);
        s.set_cell(0, '1');
        s.reset(NonZeroUsize::new(6).unwrap());
        assert_eq!(s.len(), 6);
        assert!(s.is_empty());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        let mut s = store(4);
        s.set_cell(4, '1');
    }
}
