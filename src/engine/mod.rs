//! Pin Engine - the cell state machine and its parts.
//!
//! - [`store`]: Cell Store, the ordered per-cell characters
//! - [`filter`]: Acceptance Filter, pattern/list/key-code rules
//! - [`navigator`]: Focus Navigator, focus request per step
//! - [`paste`]: Paste Distributor, multi-character input
//! - [`completion`]: Completion Notifier, empty -> complete edges
//! - [`machine`]: everything above composed into one event cascade
//!
//! # Architecture
//!
//! ```text
//! KeyboardEvent / paste text
//!        │
//!   AcceptanceFilter ──reject──► Outcome { rejected }
//!        │
//!    CellStore (mutated in place)
//!        ├──► navigator::next_focus ──► Outcome.focus
//!        └──► CompletionNotifier    ──► Outcome.filled
//! ```

pub mod completion;
pub mod filter;
pub mod machine;
pub mod navigator;
pub mod paste;
pub mod store;

pub use completion::CompletionNotifier;
pub use filter::{
    Acceptance, AcceptanceFilter, DEFAULT_FILTER_CHARS, DEFAULT_FILTER_KEY_CODES, DEFAULT_PATTERN,
};
pub use machine::{Outcome, PinConfig, PinMachine, DEFAULT_CELL_COUNT, DEFAULT_MASK_CHAR};
pub use navigator::NavStep;
pub use paste::{Distribution, PasteDistributor};
pub use store::CellStore;
