//! Primitives - Component building blocks.
//!
//! - [`pin_input`] - Segmented code entry, one character per cell
//!
//! # Architecture
//!
//! A primitive takes plain props, mounts its engine, and returns a handle:
//! 1. Props are validated into an engine config
//! 2. Signals are created for what the renderer reads
//! 3. Events go through the handle; outcomes drive focus and callbacks
//! 4. `cleanup()` returns a boxed unmount
//!
//! # Reactivity
//!
//! Pass a `Signal<String>` as `value` to stay bound to the widget:
//!
//! ```ignore
//! let code = signal(String::new());
//! let pin = pin_input(PinInputProps { value: Some(code.clone()), ..Default::default() })?;
//! // every edit writes the concatenated value into `code`
//! ```

mod pin_input;
mod types;

pub use pin_input::{pin_input, PinInput};
pub use types::*;
