//! Primitive types - Props, callbacks and cleanup.
//!
//! Props are plain structs with public fields and a `Default`, so callers
//! only spell out what they change:
//!
//! ```ignore
//! let props = PinInputProps {
//!     cell_count: 6,
//!     secret_mode: true,
//!     on_filled: Some(Rc::new(|code| println!("{code}"))),
//!     ..Default::default()
//! };
//! ```

use std::rc::Rc;

use spark_signals::Signal;

use crate::engine::{
    Acceptance, PinConfig, DEFAULT_CELL_COUNT, DEFAULT_FILTER_KEY_CODES, DEFAULT_MASK_CHAR,
};
use crate::state::FocusCallback;
use crate::types::{InputKind, PasteAnchor, TouchState};

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Callback Types
// =============================================================================

/// Called with the full, unmasked value when every cell is filled.
pub type FilledCallback = Rc<dyn Fn(&str)>;

/// Called with the concatenated value after every content change.
pub type ChangeCallback = Rc<dyn Fn(&str)>;

/// Called with the widget name and whether the value is empty.
pub type TouchCallback = Rc<dyn Fn(&str, TouchState)>;

// =============================================================================
// Pin Input Props
// =============================================================================

/// Properties for the pin input component.
#[derive(Clone)]
pub struct PinInputProps {
    // =========================================================================
    // Identity
    // =========================================================================

    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Field name reported to `on_touch`.
    pub name: Option<String>,

    // =========================================================================
    // Value
    // =========================================================================

    /// Number of cells (default 4). Zero is rejected at mount.
    pub cell_count: usize,

    /// Optional two-way bound value. Its initial content prefills the
    /// cells, host writes replace them, and every edit writes the
    /// concatenated value back.
    pub value: Option<Signal<String>>,

    // =========================================================================
    // Acceptance
    // =========================================================================

    /// Pattern or char-list rule (default: digits).
    pub acceptance: Acceptance,

    /// Key codes suppressed before they produce a character.
    pub filter_key_codes: Vec<u16>,

    /// Text or Number pre-processing.
    pub kind: InputKind,

    /// Uppercase input before checking it.
    pub case_fold: bool,

    // =========================================================================
    // Display
    // =========================================================================

    /// Show `mask_char` instead of the stored character.
    pub secret_mode: bool,

    /// Mask glyph for secret mode (default: '•').
    pub mask_char: Option<char>,

    /// Glyph shown in empty cells.
    pub placeholder: Option<char>,

    /// Render the cells with the invalid style.
    pub is_valid: bool,

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Reject all input and render as non-interactive.
    pub disabled: bool,

    /// Focus cell 0 on mount (default: true).
    pub auto_focus: bool,

    /// Where pastes start writing.
    pub paste_anchor: PasteAnchor,

    // =========================================================================
    // Callbacks
    // =========================================================================

    pub on_filled: Option<FilledCallback>,
    pub on_change: Option<ChangeCallback>,
    pub on_touch: Option<TouchCallback>,

    /// A cell gained focus.
    pub on_focus: Option<FocusCallback>,

    /// A cell lost focus.
    pub on_blur: Option<FocusCallback>,
}

impl Default for PinInputProps {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            cell_count: DEFAULT_CELL_COUNT,
            value: None,
            acceptance: Acceptance::default(),
            filter_key_codes: DEFAULT_FILTER_KEY_CODES.to_vec(),
            kind: InputKind::Text,
            case_fold: false,
            secret_mode: false,
            mask_char: None,
            placeholder: None,
            is_valid: true,
            disabled: false,
            auto_focus: true,
            paste_anchor: PasteAnchor::FocusedCell,
            on_filled: None,
            on_change: None,
            on_touch: None,
            on_focus: None,
            on_blur: None,
        }
    }
}

impl PinInputProps {
    /// The engine-side view of these props.
    pub fn config(&self) -> PinConfig {
        PinConfig {
            cell_count: self.cell_count,
            acceptance: self.acceptance.clone(),
            filter_key_codes: self.filter_key_codes.clone(),
            kind: self.kind,
            case_fold: self.case_fold,
            secret_mode: self.secret_mode,
            mask_char: self.mask_char.unwrap_or(DEFAULT_MASK_CHAR),
            placeholder: self.placeholder,
            disabled: self.disabled,
            auto_focus: self.auto_focus,
            paste_anchor: self.paste_anchor,
            is_valid: self.is_valid,
        }
    }
}
