//! Keyboard Module - Key event types and key classification
//!
//! The pin widget reacts to a small set of keys. This module defines the
//! event type handed to the widget, maps keys to the browser-style key
//! codes used by key-code deny-lists, and classifies events into the
//! actions the cell state machine understands.
//!
//! # Example
//!
//! ```ignore
//! use spark_pin::state::{KeyboardEvent, PinKey};
//!
//! let event = KeyboardEvent::new("ArrowLeft");
//! assert_eq!(PinKey::classify(&event), PinKey::Left);
//! assert_eq!(event.key_code(), Some(37));
//! ```

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Backspace", "ArrowLeft")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Press and repeat both act; release is ignored.
    pub fn is_actionable(&self) -> bool {
        self.state != KeyState::Release
    }

    /// The single character this key produces, if any.
    pub fn char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// Browser-style key code (`KeyboardEvent.keyCode`) for this key.
    ///
    /// Letters map to their uppercase ASCII code regardless of case,
    /// punctuation maps to the code of its physical US-layout key.
    pub fn key_code(&self) -> Option<u16> {
        let code = match self.key.as_str() {
            "Backspace" => key_codes::BACKSPACE,
            "Tab" => 9,
            "Enter" => 13,
            "Escape" => 27,
            "ArrowLeft" => key_codes::LEFT_ARROW,
            "ArrowUp" => key_codes::UP_ARROW,
            "ArrowRight" => key_codes::RIGHT_ARROW,
            "ArrowDown" => key_codes::DOWN_ARROW,
            "Delete" => 46,
            _ => return self.char().and_then(char_key_code),
        };
        Some(code)
    }
}

/// Key codes the widget treats specially.
pub mod key_codes {
    pub const BACKSPACE: u16 = 8;
    pub const LEFT_ARROW: u16 = 37;
    pub const UP_ARROW: u16 = 38;
    pub const RIGHT_ARROW: u16 = 39;
    pub const DOWN_ARROW: u16 = 40;
    pub const E_KEY: u16 = 69;
    pub const MINUS: u16 = 189;
    pub const PERIOD: u16 = 190;
}

fn char_key_code(c: char) -> Option<u16> {
    let code = match c {
        '0'..='9' => c as u16,
        'a'..='z' => c.to_ascii_uppercase() as u16,
        'A'..='Z' => c as u16,
        ' ' => 32,
        ')' => 48,
        '!' => 49,
        '@' => 50,
        '#' => 51,
        '$' => 52,
        '%' => 53,
        '^' => 54,
        '&' => 55,
        '*' => 56,
        '(' => 57,
        ';' | ':' => 186,
        '=' | '+' => 187,
        ',' | '<' => 188,
        '-' | '_' => key_codes::MINUS,
        '.' | '>' => key_codes::PERIOD,
        '/' | '?' => 191,
        '`' | '~' => 192,
        '[' | '{' => 219,
        '\\' | '|' => 220,
        ']' | '}' => 221,
        '\'' | '"' => 222,
        _ => return None,
    };
    Some(code)
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// What a keyboard event means to the pin widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinKey {
    /// A printable character (no ctrl/alt/meta).
    Char(char),
    Backspace,
    Left,
    Right,
    Up,
    Down,
    /// Ctrl+V.
    Paste,
    /// Anything else; left to the host.
    Other,
}

impl PinKey {
    pub fn classify(event: &KeyboardEvent) -> Self {
        let m = event.modifiers;
        if m.ctrl && !m.alt && matches!(event.key.as_str(), "v" | "V") {
            return Self::Paste;
        }

        match event.key.as_str() {
            "Backspace" => Self::Backspace,
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            _ => match event.char() {
                Some(c) if !m.ctrl && !m.alt && !m.meta => Self::Char(c),
                _ => Self::Other,
            },
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("Backspace", Some(8))]
    #[test_case("ArrowLeft", Some(37))]
    #[test_case("ArrowDown", Some(40))]
    #[test_case("e", Some(69))]
    #[test_case("E", Some(69))]
    #[test_case("-", Some(189))]
    #[test_case(".", Some(190))]
    #[test_case("7", Some(55))]
    #[test_case("F5", None)]
    #[test_case("é", None)]
    fn test_key_code(key: &str, expected: Option<u16>) {
        assert_eq!(KeyboardEvent::new(key).key_code(), expected);
    }

    #[test_case("a", PinKey::Char('a'))]
    #[test_case("Backspace", PinKey::Backspace)]
    #[test_case("ArrowLeft", PinKey::Left)]
    #[test_case("ArrowRight", PinKey::Right)]
    #[test_case("ArrowUp", PinKey::Up)]
    #[test_case("ArrowDown", PinKey::Down)]
    #[test_case("Enter", PinKey::Other)]
    fn test_classify(key: &str, expected: PinKey) {
        assert_eq!(PinKey::classify(&KeyboardEvent::new(key)), expected);
    }

    #[test]
    fn test_ctrl_combinations() {
        let paste = KeyboardEvent::with_modifiers("v", Modifiers::ctrl());
        assert_eq!(PinKey::classify(&paste), PinKey::Paste);

        let ctrl_a = KeyboardEvent::with_modifiers("a", Modifiers::ctrl());
        assert_eq!(PinKey::classify(&ctrl_a), PinKey::Other);

        let shifted = KeyboardEvent::with_modifiers("A", Modifiers::shift());
        assert_eq!(PinKey::classify(&shifted), PinKey::Char('A'));
    }

    #[test]
    fn test_release_not_actionable() {
        let mut event = KeyboardEvent::new("1");
        assert!(event.is_actionable());
        event.state = KeyState::Repeat;
        assert!(event.is_actionable());
        event.state = KeyState::Release;
        assert!(!event.is_actionable());
    }
}
