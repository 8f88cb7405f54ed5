//! # spark-pin
//!
//! Segmented PIN / verification-code input for terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! reactive state and [crossterm](https://docs.rs/crossterm) for terminal I/O.
//!
//! ## Architecture
//!
//! A fixed row of single-character cells. Every event runs one cascade to
//! completion before the next is handled:
//!
//! ```text
//! crossterm Event → InputEvent → PinInput → PinMachine → Outcome
//!                                    │                      │
//!                                    │          focus / on_change / on_filled
//!                                    └── cells signal → InlineRenderer
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Colors, attributes, cell views, input kind
//! - [`engine`] - Cell store, acceptance filter, focus navigator, paste, completion
//! - [`state`] - Keyboard events, crossterm conversion, focus tracker, clipboard
//! - [`primitives`] - The `pin_input` component
//! - [`renderer`] - Inline crossterm output
//! - [`error`] - Configuration errors

pub mod engine;
pub mod error;
pub mod primitives;
pub mod renderer;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use error::ConfigError;

pub use engine::{Acceptance, Outcome, PinConfig, PinMachine};

pub use primitives::{pin_input, Cleanup, PinInput, PinInputProps};

pub use renderer::InlineRenderer;

pub use state::{
    FocusCallbacks, FocusTracker, InputEvent, KeyState, KeyboardEvent, Modifiers, PinKey,
};
