//! Pin Input Primitive - segmented one-character-per-cell code entry.
//!
//! Wraps a [`PinMachine`] with the pieces a terminal UI needs: a focus
//! tracker, reactive signals for the rendered cells and the value, and
//! the host callbacks.
//!
//! # Features
//!
//! - Fixed number of single-character cells, filled left to right
//! - Pattern, deny-list or allow-list acceptance, key-code filtering
//! - Focus follows typing, arrows and backspace
//! - Paste (bracketed or Ctrl+V) spread across cells
//! - Secret mode with configurable mask
//! - `on_filled` once per completion, `on_change` per edit
//!
//! # Example
//!
//! ```ignore
//! use spark_pin::primitives::{pin_input, PinInputProps};
//! use std::rc::Rc;
//!
//! let pin = pin_input(PinInputProps {
//!     cell_count: 6,
//!     on_filled: Some(Rc::new(|code| println!("code: {code}"))),
//!     ..Default::default()
//! })?;
//!
//! // In the event loop
//! pin.handle_event(&event);
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use spark_signals::{effect_sync, signal, Signal};
use tracing::debug;

use super::types::{ChangeCallback, Cleanup, FilledCallback, PinInputProps, TouchCallback};
use crate::engine::{Outcome, PinMachine};
use crate::error::ConfigError;
use crate::state::{clipboard, FocusCallbacks, FocusTracker, InputEvent, KeyboardEvent, PinKey};
use crate::types::{CellView, TouchState};

struct PinInputInner {
    id: Option<String>,
    name: String,
    machine: RefCell<PinMachine>,
    focus: FocusTracker,
    cells: Signal<Vec<CellView>>,
    value: Signal<String>,
    on_filled: Option<FilledCallback>,
    on_change: Option<ChangeCallback>,
    on_touch: Option<TouchCallback>,
    focus_cleanup: RefCell<Option<Cleanup>>,
    stop_value_effect: RefCell<Option<Cleanup>>,
}

/// Handle to a mounted pin input. Cheap to clone (shared).
#[derive(Clone)]
pub struct PinInput {
    inner: Rc<PinInputInner>,
}

impl std::fmt::Debug for PinInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinInput")
            .field("id", &self.inner.id)
            .field("cells", &self.cell_count())
            .field("focused", &self.focused_cell())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

// =============================================================================
// Pin Input Component
// =============================================================================

/// Mount a pin input.
///
/// Fails if the props describe an unusable widget (no cells, a malformed
/// pattern, an empty allow-list). A non-empty bound `value` prefills the
/// cells without firing callbacks, and later writes to it from the host
/// replace the cells the same way. With `auto_focus`, cell 0 is focused.
pub fn pin_input(props: PinInputProps) -> Result<PinInput, ConfigError> {
    let mut machine = PinMachine::new(props.config())?;

    let value = props.value.clone().unwrap_or_else(|| signal(String::new()));
    let initial = value.get();
    if !initial.is_empty() {
        machine.set_value(&initial);
    }

    let focus = FocusTracker::new();
    let focus_cleanup: Option<Cleanup> = if props.on_focus.is_some() || props.on_blur.is_some() {
        Some(Box::new(focus.register_callbacks(FocusCallbacks {
            on_focus: props.on_focus.clone(),
            on_blur: props.on_blur.clone(),
        })))
    } else {
        None
    };

    let mount = machine.on_mount();
    debug!(id = ?props.id, cells = machine.cell_count(), "pin input mounted");

    let pin = PinInput {
        inner: Rc::new(PinInputInner {
            id: props.id,
            name: props.name.unwrap_or_default(),
            cells: signal(machine.views(None)),
            machine: RefCell::new(machine),
            focus,
            value,
            on_filled: props.on_filled,
            on_change: props.on_change,
            on_touch: props.on_touch,
            focus_cleanup: RefCell::new(focus_cleanup),
            stop_value_effect: RefCell::new(None),
        }),
    };

    pin.inner.focus.apply(mount.focus);
    pin.sync();

    let stop = effect_sync(value_follower(Rc::downgrade(&pin.inner)));
    *pin.inner.stop_value_effect.borrow_mut() = Some(Box::new(stop));
    Ok(pin)
}

/// Effect body that copies host writes of the bound value into the cells.
/// The widget's own writes match the machine value and are skipped.
fn value_follower(inner: Weak<PinInputInner>) -> impl FnMut() + 'static {
    move || {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let next = inner.value.get();
        if next == inner.machine.borrow().value() {
            return;
        }
        debug!(id = ?inner.id, "bound value written by host");
        PinInput { inner }.set_value(&next);
    }
}

impl PinInput {
    // =========================================================================
    // Queries
    // =========================================================================

    pub fn id(&self) -> Option<&str> {
        self.inner.id.as_deref()
    }

    pub fn cell_count(&self) -> usize {
        self.inner.machine.borrow().cell_count()
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.machine.borrow().is_mounted()
    }

    /// Concatenated, unmasked value.
    pub fn value(&self) -> String {
        self.inner.machine.borrow().value()
    }

    /// Per-cell contents, `""` for empty cells.
    pub fn values(&self) -> Vec<String> {
        self.inner.machine.borrow().values()
    }

    pub fn is_complete(&self) -> bool {
        self.inner.machine.borrow().is_complete()
    }

    /// What the user sees for the filled cells.
    pub fn display_value(&self) -> String {
        self.inner.machine.borrow().display_value()
    }

    pub fn focused_cell(&self) -> Option<usize> {
        self.inner.focus.focused()
    }

    /// Current render snapshot.
    pub fn views(&self) -> Vec<CellView> {
        self.inner.cells.get()
    }

    /// Reactive render snapshot, updated after every event.
    pub fn cells_signal(&self) -> Signal<Vec<CellView>> {
        self.inner.cells.clone()
    }

    /// Reactive concatenated value.
    pub fn value_signal(&self) -> Signal<String> {
        self.inner.value.clone()
    }

    pub fn focus_signal(&self) -> Signal<Option<usize>> {
        self.inner.focus.focused_signal()
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Route a terminal event. Returns true if the widget consumed it.
    pub fn handle_event(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Paste(text) => self.paste(text),
            InputEvent::FocusLost => {
                self.blur();
                false
            }
            InputEvent::FocusGained | InputEvent::Resize(..) | InputEvent::None => false,
        }
    }

    /// Key press on the focused cell. Ignored while no cell is focused.
    pub fn handle_key(&self, event: &KeyboardEvent) -> bool {
        let Some(index) = self.focused_cell() else {
            return false;
        };

        if PinKey::classify(event) == PinKey::Paste && event.is_actionable() {
            return match clipboard::paste() {
                Some(text) => self.paste_at(index, &text),
                None => true,
            };
        }

        let outcome = self.inner.machine.borrow_mut().key_down(index, event);
        self.apply(outcome)
    }

    /// Character input at `index`, as if typed into that cell.
    pub fn type_text(&self, index: usize, text: &str) -> bool {
        let outcome = self.inner.machine.borrow_mut().input(index, text);
        self.apply(outcome)
    }

    /// Paste at the focused cell (cell 0 when nothing is focused).
    pub fn paste(&self, text: &str) -> bool {
        self.paste_at(self.focused_cell().unwrap_or(0), text)
    }

    pub fn paste_at(&self, index: usize, text: &str) -> bool {
        let outcome = self.inner.machine.borrow_mut().paste(index, text);
        self.apply(outcome)
    }

    /// Host-driven focus (click, tab into the widget).
    pub fn focus_cell(&self, index: usize) -> bool {
        let outcome = self.inner.machine.borrow().focus_cell(index);
        self.inner.focus.apply(outcome.focus);
        self.sync();
        outcome.consumed
    }

    /// Focus left the widget.
    pub fn blur(&self) {
        if self.inner.focus.blur().is_some() {
            self.sync();
            self.touch();
        }
    }

    // =========================================================================
    // Reconfiguration
    // =========================================================================

    /// Rebuild with `count` empty cells and refocus cell 0.
    pub fn set_cell_count(&self, count: usize) -> Result<(), ConfigError> {
        let outcome = self.inner.machine.borrow_mut().set_cell_count(count)?;
        self.inner.focus.apply(outcome.focus);
        self.sync();
        Ok(())
    }

    /// Replace the value from outside. Fires no callbacks.
    pub fn set_value(&self, value: &str) {
        self.inner.machine.borrow_mut().set_value(value);
        self.sync();
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Tear down. Later events and focus calls are no-ops.
    pub fn unmount(&self) {
        if let Some(stop) = self.inner.stop_value_effect.borrow_mut().take() {
            stop();
        }
        self.inner.machine.borrow_mut().unmount();
        if let Some(cleanup) = self.inner.focus_cleanup.borrow_mut().take() {
            cleanup();
        }
        self.inner.focus.detach();
        debug!(id = ?self.inner.id, "pin input unmounted");
    }

    /// Boxed unmount, for hosts that collect cleanups.
    pub fn cleanup(&self) -> Cleanup {
        let pin = self.clone();
        Box::new(move || pin.unmount())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Focus first, then publish, then notify.
    fn apply(&self, outcome: Outcome) -> bool {
        self.inner.focus.apply(outcome.focus);
        self.sync();

        if outcome.changed {
            if let Some(ref cb) = self.inner.on_change {
                cb(&self.value());
            }
        }
        if let Some(ref filled) = outcome.filled {
            if let Some(ref cb) = self.inner.on_filled {
                cb(filled);
            }
        }
        if outcome.consumed {
            self.touch();
        }
        outcome.consumed
    }

    fn sync(&self) {
        let (views, value) = {
            let machine = self.inner.machine.borrow();
            (machine.views(self.focused_cell()), machine.value())
        };
        self.inner.cells.set(views);
        self.inner.value.set(value);
    }

    fn touch(&self) {
        if self.inner.machine.borrow().config().disabled {
            return;
        }
        if let Some(ref cb) = self.inner.on_touch {
            cb(&self.inner.name, TouchState::for_value(&self.value()));
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
