//! Focus System - which cell owns keyboard focus
//!
//! The engine only *requests* focus; the tracker applies those requests:
//! - `focused` signal (currently focused cell, `None` when blurred)
//! - focus/blur callbacks fired at the source, old cell first
//! - detach on unmount, after which every focus call is a no-op
//!
//! # Example
//!
//! ```ignore
//! use spark_pin::state::{FocusTracker, FocusCallbacks};
//!
//! let tracker = FocusTracker::new();
//! let cleanup = tracker.register_callbacks(FocusCallbacks {
//!     on_focus: Some(Rc::new(|i| println!("cell {i} focused"))),
//!     on_blur: None,
//! });
//! tracker.focus(0);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{signal, Signal};
use tracing::trace;

// =============================================================================
// FOCUS CALLBACKS
// =============================================================================

/// Cell focus callback; receives the cell index.
pub type FocusCallback = Rc<dyn Fn(usize)>;

/// Callbacks fired when focus moves between cells
#[derive(Clone, Default)]
pub struct FocusCallbacks {
    pub on_focus: Option<FocusCallback>,
    pub on_blur: Option<FocusCallback>,
}

// =============================================================================
// TRACKER
// =============================================================================

struct FocusInner {
    focused: Signal<Option<usize>>,
    callbacks: RefCell<Vec<(usize, FocusCallbacks)>>,
    next_id: Cell<usize>,
    detached: Cell<bool>,
}

/// Focus state for one widget. Cheap to clone (shared).
#[derive(Clone)]
pub struct FocusTracker {
    inner: Rc<FocusInner>,
}

impl Default for FocusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FocusTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusTracker")
            .field("focused", &self.focused())
            .field("detached", &self.is_detached())
            .finish()
    }
}

impl FocusTracker {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(FocusInner {
                focused: signal(None),
                callbacks: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                detached: Cell::new(false),
            }),
        }
    }

    /// Currently focused cell
    pub fn focused(&self) -> Option<usize> {
        self.inner.focused.get()
    }

    /// Reactive handle to the focused cell
    pub fn focused_signal(&self) -> Signal<Option<usize>> {
        self.inner.focused.clone()
    }

    pub fn is_focused(&self, index: usize) -> bool {
        self.focused() == Some(index)
    }

    pub fn is_detached(&self) -> bool {
        self.inner.detached.get()
    }

    /// Register focus callbacks.
    /// Returns cleanup function to unregister.
    pub fn register_callbacks(&self, callbacks: FocusCallbacks) -> impl FnOnce() + use<> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.callbacks.borrow_mut().push((id, callbacks));

        let inner = Rc::downgrade(&self.inner);
        move || {
            if let Some(inner) = inner.upgrade() {
                inner.callbacks.borrow_mut().retain(|(cb_id, _)| *cb_id != id);
            }
        }
    }

    fn snapshot(&self) -> Vec<FocusCallbacks> {
        self.inner
            .callbacks
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect()
    }

    /// Set focus and fire callbacks at the source
    fn set_focus_with_callbacks(&self, new_index: Option<usize>) {
        let old_index = self.focused();

        // No change, no callbacks
        if old_index == new_index {
            return;
        }

        let callbacks = self.snapshot();

        if let Some(old) = old_index {
            for cb in &callbacks {
                if let Some(ref on_blur) = cb.on_blur {
                    on_blur(old);
                }
            }
        }

        self.inner.focused.set(new_index);
        trace!(?old_index, ?new_index, "focus moved");

        if let Some(new) = new_index {
            for cb in &callbacks {
                if let Some(ref on_focus) = cb.on_focus {
                    on_focus(new);
                }
            }
        }
    }

    /// Focus a cell. Returns false once detached.
    pub fn focus(&self, index: usize) -> bool {
        if self.is_detached() {
            return false;
        }
        self.set_focus_with_callbacks(Some(index));
        true
    }

    /// Apply a focus request from the engine (`None` = leave focus alone).
    pub fn apply(&self, request: Option<usize>) -> bool {
        match request {
            Some(index) => self.focus(index),
            None => false,
        }
    }

    /// Clear focus. Returns the cell that lost it.
    pub fn blur(&self) -> Option<usize> {
        if self.is_detached() {
            return None;
        }
        let old = self.focused();
        self.set_focus_with_callbacks(None);
        old
    }

    /// Unmount: drop focus without callbacks and ignore every later call.
    pub fn detach(&self) {
        self.inner.detached.set(true);
        self.inner.callbacks.borrow_mut().clear();
        self.inner.focused.set(None);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, FocusCallbacks) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let focus_log = log.clone();
        let blur_log = log.clone();
        let callbacks = FocusCallbacks {
            on_focus: Some(Rc::new(move |i| focus_log.borrow_mut().push(format!("focus {i}")))),
            on_blur: Some(Rc::new(move |i| blur_log.borrow_mut().push(format!("blur {i}")))),
        };
        (log, callbacks)
    }

    #[test]
    fn test_focus_and_blur_order() {
        let tracker = FocusTracker::new();
        let (log, callbacks) = recorder();
        let _cleanup = tracker.register_callbacks(callbacks);

        tracker.focus(0);
        tracker.focus(2);
        tracker.focus(2);
        assert_eq!(tracker.blur(), Some(2));

        assert_eq!(
            *log.borrow(),
            vec!["focus 0", "blur 0", "focus 2", "blur 2"]
        );
        assert_eq!(tracker.focused(), None);
    }

    #[test]
    fn test_cleanup_unregisters() {
        let tracker = FocusTracker::new();
        let (log, callbacks) = recorder();
        let cleanup = tracker.register_callbacks(callbacks);

        tracker.focus(1);
        cleanup();
        tracker.focus(0);

        assert_eq!(*log.borrow(), vec!["focus 1"]);
        assert!(tracker.is_focused(0));
    }

    #[test]
    fn test_apply_none_is_noop() {
        let tracker = FocusTracker::new();
        tracker.focus(3);
        assert!(!tracker.apply(None));
        assert_eq!(tracker.focused(), Some(3));
        assert!(tracker.apply(Some(1)));
        assert_eq!(tracker.focused(), Some(1));
    }

    #[test]
    fn test_detached_focus_is_noop() {
        let tracker = FocusTracker::new();
        let (log, callbacks) = recorder();
        let _cleanup = tracker.register_callbacks(callbacks);
        tracker.focus(0);

        tracker.detach();
        assert!(!tracker.focus(1));
        assert_eq!(tracker.blur(), None);
        assert_eq!(tracker.focused(), None);
        assert_eq!(*log.borrow(), vec!["focus 0"]);
    }

    #[test]
    fn test_focused_signal_tracks() {
        let tracker = FocusTracker::new();
        let sig = tracker.focused_signal();
        tracker.focus(2);
        assert_eq!(sig.get(), Some(2));
    }
}
