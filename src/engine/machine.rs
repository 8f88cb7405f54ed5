//! Pin Machine - the cell state machine.
//!
//! Composes the acceptance filter, cell store, focus navigator, paste
//! distributor and completion notifier. Every event runs the same cascade
//! to completion and returns an [`Outcome`]:
//!
//! ```text
//! event → filter → store mutation → focus request → completion check
//! ```
//!
//! The machine never touches a UI handle. Focus is a request in the
//! outcome, and callbacks are left to the caller (see
//! [`crate::primitives::pin_input`]).

use std::num::NonZeroUsize;

use tracing::{debug, trace};

use super::completion::CompletionNotifier;
use super::filter::{Acceptance, AcceptanceFilter, DEFAULT_FILTER_KEY_CODES};
use super::navigator::{self, NavStep};
use super::paste::PasteDistributor;
use super::store::CellStore;
use crate::error::ConfigError;
use crate::state::{KeyboardEvent, PinKey};
use crate::types::{CellFlags, CellView, InputKind, PasteAnchor};

/// Default number of cells.
pub const DEFAULT_CELL_COUNT: usize = 4;

/// Default glyph shown for filled cells in secret mode.
pub const DEFAULT_MASK_CHAR: char = '•';

// =============================================================================
// Config
// =============================================================================

/// Engine-side configuration. Validated by [`PinMachine::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinConfig {
    pub cell_count: usize,
    pub acceptance: Acceptance,
    /// Raw key codes suppressed before they produce a character.
    pub filter_key_codes: Vec<u16>,
    pub kind: InputKind,
    /// Uppercase input before the acceptance rule.
    pub case_fold: bool,
    pub secret_mode: bool,
    pub mask_char: char,
    /// Glyph for empty cells (blank when `None`).
    pub placeholder: Option<char>,
    pub disabled: bool,
    pub auto_focus: bool,
    pub paste_anchor: PasteAnchor,
    /// Display-only validity marker.
    pub is_valid: bool,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            cell_count: DEFAULT_CELL_COUNT,
            acceptance: Acceptance::default(),
            filter_key_codes: DEFAULT_FILTER_KEY_CODES.to_vec(),
            kind: InputKind::Text,
            case_fold: false,
            secret_mode: false,
            mask_char: DEFAULT_MASK_CHAR,
            placeholder: None,
            disabled: false,
            auto_focus: true,
            paste_anchor: PasteAnchor::FocusedCell,
            is_valid: true,
        }
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// Result of one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Cell that should receive focus; `None` leaves focus alone.
    pub focus: Option<usize>,
    /// Cell contents changed.
    pub changed: bool,
    /// The edit completed the value; carries the unmasked value.
    pub filled: Option<String>,
    /// The widget handled the event (the host must not apply its default).
    pub consumed: bool,
    /// Input was discarded by the acceptance filter.
    pub rejected: bool,
}

impl Outcome {
    fn consumed() -> Self {
        Self {
            consumed: true,
            ..Self::default()
        }
    }

    fn focus(index: Option<usize>) -> Self {
        Self {
            focus: index,
            consumed: true,
            ..Self::default()
        }
    }

    fn rejected() -> Self {
        Self {
            consumed: true,
            rejected: true,
            ..Self::default()
        }
    }
}

// =============================================================================
// Machine
// =============================================================================

/// The cell state machine for one mounted widget.
#[derive(Debug, Clone)]
pub struct PinMachine {
    config: PinConfig,
    filter: AcceptanceFilter,
    distributor: PasteDistributor,
    store: CellStore,
    notifier: CompletionNotifier,
    mounted: bool,
}

impl PinMachine {
    /// Validate the configuration and mount an all-empty store.
    pub fn new(config: PinConfig) -> Result<Self, ConfigError> {
        let count = NonZeroUsize::new(config.cell_count).ok_or(ConfigError::NoCells)?;
        let filter = AcceptanceFilter::new(
            &config.acceptance,
            &config.filter_key_codes,
            config.kind,
            config.case_fold,
        )?;

        Ok(Self {
            distributor: PasteDistributor::new(config.paste_anchor),
            store: CellStore::new(count),
            notifier: CompletionNotifier::new(),
            filter,
            config,
            mounted: true,
        })
    }

    pub fn config(&self) -> &PinConfig {
        &self.config
    }

    pub fn store(&self) -> &CellStore {
        &self.store
    }

    pub fn cell_count(&self) -> usize {
        self.store.len()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Concatenated cell contents (never masked).
    pub fn value(&self) -> String {
        self.store.joined()
    }

    pub fn values(&self) -> Vec<String> {
        self.store.values()
    }

    pub fn is_complete(&self) -> bool {
        self.store.is_complete()
    }

    /// Focus request for mount: cell 0 when auto-focus is on.
    pub fn on_mount(&self) -> Outcome {
        if !self.mounted || self.config.disabled || !self.config.auto_focus {
            return Outcome::default();
        }
        Outcome::focus(navigator::next_focus(NavStep::Reset, &self.store))
    }

    /// Tear down. Every later event is a no-op.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    fn blocked(&self) -> Option<Outcome> {
        if !self.mounted {
            debug!("event after unmount ignored");
            return Some(Outcome::default());
        }
        if self.config.disabled {
            return Some(Outcome::consumed());
        }
        None
    }

    /// Rebuild the store with `count` empty cells and refocus cell 0.
    pub fn set_cell_count(&mut self, count: usize) -> Result<Outcome, ConfigError> {
        let count = NonZeroUsize::new(count).ok_or(ConfigError::NoCells)?;
        debug!(from = self.store.len(), to = count.get(), "cell count changed");

        self.config.cell_count = count.get();
        self.store.reset(count);
        self.notifier.reset();

        if !self.mounted {
            return Ok(Outcome::default());
        }
        Ok(Outcome::focus(navigator::next_focus(NavStep::Reset, &self.store)))
    }

    /// Replace the whole value from outside (initial or bound value).
    ///
    /// The text is sanitized and written from cell 0; the rest is dropped.
    /// No completion is reported for it.
    pub fn set_value(&mut self, value: &str) {
        let chars = self.filter.sanitize(value);
        self.store.clear_all();
        self.distributor.distribute(&mut self.store, 0, &chars);
        self.notifier.prime(&self.store);
    }

    /// Host-driven focus (click, tab). No content change.
    pub fn focus_cell(&self, index: usize) -> Outcome {
        if !self.mounted || self.config.disabled {
            return Outcome::default();
        }
        Outcome::focus(Some(navigator::clamp(index, &self.store)))
    }

    /// Character input at `index`. Several characters at once (fast
    /// typing, autofill) are distributed from `index`.
    ///
    /// Panics if `index` is not a cell.
    pub fn input(&mut self, index: usize, text: &str) -> Outcome {
        if let Some(outcome) = self.blocked() {
            return outcome;
        }
        self.store.check(index);

        let chars = self.filter.sanitize(text);
        match chars.as_slice() {
            [] => {
                trace!(index, text, "input rejected");
                Outcome::rejected()
            }
            [c] => {
                self.store.set_cell(index, *c);
                self.after_write(NavStep::Entry { index })
            }
            _ => {
                let d = self.distributor.distribute(&mut self.store, index, &chars);
                self.after_write(NavStep::Paste {
                    start: d.start,
                    written: d.written,
                })
            }
        }
    }

    /// Clipboard paste targeted at `index`. Panics if `index` is not a cell.
    pub fn paste(&mut self, index: usize, text: &str) -> Outcome {
        if let Some(outcome) = self.blocked() {
            return outcome;
        }
        self.store.check(index);

        let chars = self.filter.sanitize(text);
        if chars.is_empty() {
            trace!(index, "paste empty after sanitize");
            return Outcome::rejected();
        }

        let d = self.distributor.paste(&mut self.store, index, &chars);
        debug!(start = d.start, written = d.written, "paste distributed");
        self.after_write(NavStep::Paste {
            start: d.start,
            written: d.written,
        })
    }

    fn after_write(&mut self, step: NavStep) -> Outcome {
        Outcome {
            focus: navigator::next_focus(step, &self.store),
            changed: true,
            filled: self.notifier.observe(&self.store),
            consumed: true,
            rejected: false,
        }
    }

    /// Key press on the cell at `index`.
    ///
    /// Ctrl+V is not handled here (the caller owns the clipboard) and is
    /// returned unconsumed, like any key the widget does not use.
    pub fn key_down(&mut self, index: usize, event: &KeyboardEvent) -> Outcome {
        if !event.is_actionable() {
            return Outcome::default();
        }
        if let Some(outcome) = self.blocked() {
            return outcome;
        }
        self.store.check(index);
        if self.filter.blocks_key(event) {
            trace!(key = %event.key, "key code filtered");
            return Outcome::consumed();
        }

        match PinKey::classify(event) {
            PinKey::Char(c) => {
                let mut buf = [0u8; 4];
                self.input(index, c.encode_utf8(&mut buf))
            }
            PinKey::Backspace => self.backspace(index),
            PinKey::Left => Outcome::focus(navigator::next_focus(NavStep::Left { index }, &self.store)),
            PinKey::Right => Outcome::focus(navigator::next_focus(NavStep::Right { index }, &self.store)),
            PinKey::Up => Outcome::focus(navigator::next_focus(NavStep::Up, &self.store)),
            PinKey::Down => Outcome::focus(navigator::next_focus(NavStep::Down, &self.store)),
            PinKey::Paste | PinKey::Other => Outcome::default(),
        }
    }

    fn backspace(&mut self, index: usize) -> Outcome {
        let was_empty = self.store.is_cell_empty(index);
        if !was_empty {
            self.store.clear_cell(index);
            self.notifier.observe_removal(&self.store);
        }

        Outcome {
            focus: navigator::next_focus(NavStep::Backspace { index, was_empty }, &self.store),
            changed: !was_empty,
            filled: None,
            consumed: true,
            rejected: false,
        }
    }

    /// Display snapshot. Secret mode masks glyphs, never the value.
    pub fn views(&self, focused: Option<usize>) -> Vec<CellView> {
        let mut base = CellFlags::NONE;
        if self.config.disabled {
            base |= CellFlags::DISABLED;
        }
        if !self.config.is_valid {
            base |= CellFlags::INVALID;
        }

        self.store
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let mut flags = base;
                if focused == Some(i) {
                    flags |= CellFlags::FOCUSED;
                }
                let glyph = match (cell, self.config.placeholder) {
                    (Some(_), _) if self.config.secret_mode => {
                        flags |= CellFlags::FILLED | CellFlags::MASKED;
                        self.config.mask_char
                    }
                    (Some(c), _) => {
                        flags |= CellFlags::FILLED;
                        c
                    }
                    (None, Some(p)) => {
                        flags |= CellFlags::PLACEHOLDER;
                        p
                    }
                    (None, None) => ' ',
                };
                CellView { glyph, flags }
            })
            .collect()
    }

    /// What the user sees for the filled cells, in order.
    pub fn display_value(&self) -> String {
        self.views(None)
            .iter()
            .filter(|v| v.is_filled())
            .map(|v| v.glyph)
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
