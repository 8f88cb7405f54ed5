//! Core types for spark-pin.
//!
//! These types are shared by the engine, the primitive, and the renderer.
//! They describe what a cell holds, how it should look, and how the
//! widget interprets its input.

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: 255,
    };

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const LIGHT_GREY: Self = Self::rgb(211, 211, 211);
    pub const INVALID_FG: Self = Self::rgb(0xb9, 0x4a, 0x48);
    pub const INVALID_BG: Self = Self::rgb(0xf2, 0xde, 0xde);
    pub const DISABLED_BG: Self = Self::rgb(0xef, 0xef, 0xf1);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }
}

// =============================================================================
// Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::INVERSE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const UNDERLINE = 1 << 2;
        const INVERSE = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Per-cell display state computed from the store and props.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const NONE = 0;
        /// The cell holds a character.
        const FILLED = 1 << 0;
        /// The cell owns keyboard focus.
        const FOCUSED = 1 << 1;
        /// The glyph is the mask character, not the stored one.
        const MASKED = 1 << 2;
        /// The widget is disabled.
        const DISABLED = 1 << 3;
        /// The host marked the value invalid.
        const INVALID = 1 << 4;
        /// The glyph is the placeholder.
        const PLACEHOLDER = 1 << 5;
    }
}

// =============================================================================
// Cell View - what the renderer draws for one slot
// =============================================================================

/// Display snapshot of one cell.
///
/// `glyph` is what the user sees; with secret mode it is the mask
/// character, never the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub glyph: char,
    pub flags: CellFlags,
}

impl CellView {
    pub fn is_focused(&self) -> bool {
        self.flags.contains(CellFlags::FOCUSED)
    }

    pub fn is_filled(&self) -> bool {
        self.flags.contains(CellFlags::FILLED)
    }

    /// Foreground/background/attributes the renderer should use.
    pub fn style(&self) -> (Rgba, Rgba, Attr) {
        if self.flags.contains(CellFlags::DISABLED) {
            return (Rgba::LIGHT_GREY, Rgba::DISABLED_BG, Attr::DIM);
        }

        let (fg, bg) = if self.flags.contains(CellFlags::INVALID) {
            (Rgba::INVALID_FG, Rgba::INVALID_BG)
        } else {
            (Rgba::TERMINAL_DEFAULT, Rgba::TERMINAL_DEFAULT)
        };

        let mut attrs = Attr::BOLD;
        if self.flags.contains(CellFlags::PLACEHOLDER) {
            attrs = Attr::DIM;
        }
        if self.is_focused() {
            attrs |= Attr::INVERSE;
        }
        (fg, bg, attrs)
    }
}

// =============================================================================
// Input interpretation
// =============================================================================

/// How raw input is pre-processed before the acceptance rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// Characters go straight to the acceptance rule.
    #[default]
    Text,
    /// Non-digits are stripped first and the `e` key is blocked.
    Number,
}

/// Where a paste starts writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteAnchor {
    /// Start at the focused cell; truncate to the remaining cells.
    #[default]
    FocusedCell,
    /// Always overwrite from cell 0; truncate to `cell_count`.
    FirstCell,
}

/// Reported to the touch callback after handled events and on blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchState {
    /// The value is empty.
    Touched,
    /// The value has at least one character.
    Untouched,
}

impl TouchState {
    pub fn for_value(value: &str) -> Self {
        if value.is_empty() {
            Self::Touched
        } else {
            Self::Untouched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_focused_cell_is_inverse() {
        let view = CellView {
            glyph: '1',
            flags: CellFlags::FILLED | CellFlags::FOCUSED,
        };
        let (_, _, attrs) = view.style();
        assert!(attrs.contains(Attr::INVERSE | Attr::BOLD));
    }

    #[test]
    fn test_disabled_wins_over_invalid() {
        let view = CellView {
            glyph: ' ',
            flags: CellFlags::DISABLED | CellFlags::INVALID,
        };
        assert_eq!(view.style(), (Rgba::LIGHT_GREY, Rgba::DISABLED_BG, Attr::DIM));
    }

    #[test]
    fn test_touch_state_for_value() {
        assert_eq!(TouchState::for_value(""), TouchState::Touched);
        assert_eq!(TouchState::for_value("12"), TouchState::Untouched);
    }
}
