//! Clipboard Module - Paste source for Ctrl+V
//!
//! Terminals deliver real pastes as bracketed paste events. Ctrl+V inside
//! the widget reads from this internal buffer instead, which the host (or
//! a test) fills with [`copy`].
//!
//! # Example
//!
//! ```ignore
//! use spark_pin::state::clipboard;
//!
//! clipboard::copy("123456");
//! // Ctrl+V on a focused cell now pastes "123456"
//! ```

use std::cell::RefCell;

thread_local! {
    static CLIPBOARD_BUFFER: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Put text on the clipboard. Empty strings are ignored.
pub fn copy(text: &str) {
    if text.is_empty() {
        return;
    }
    CLIPBOARD_BUFFER.with(|buf| *buf.borrow_mut() = Some(text.to_string()));
}

/// The most recently copied text.
pub fn paste() -> Option<String> {
    CLIPBOARD_BUFFER.with(|buf| buf.borrow().clone())
}

/// Clear the clipboard.
pub fn clear() {
    CLIPBOARD_BUFFER.with(|buf| *buf.borrow_mut() = None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_copy_paste() {
        clear();
        assert!(paste().is_none());

        copy("0420");
        assert_eq!(paste(), Some("0420".to_string()));
        // Non-destructive
        assert_eq!(paste(), Some("0420".to_string()));
    }

    #[test]
    fn test_copy_empty_ignored() {
        clear();
        copy("77");
        copy("");
        assert_eq!(paste(), Some("77".to_string()));

        clear();
        assert!(paste().is_none());
    }
}
