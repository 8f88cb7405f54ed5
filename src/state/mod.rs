//! State Module - Runtime input and focus state
//!
//! - **Keyboard** - Event types, key codes, key classification
//! - **Input** - crossterm event conversion, polling, bracketed paste
//! - **Focus** - Per-widget focus tracker with callbacks
//! - **Clipboard** - Internal buffer behind Ctrl+V

pub mod clipboard;
mod focus;
pub mod input;
mod keyboard;

pub use focus::*;
pub use input::InputEvent;
pub use keyboard::*;
