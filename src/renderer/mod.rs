//! Terminal renderer - the "blind" output layer.
//!
//! The renderer knows only about [`CellView`](crate::types::CellView)
//! snapshots. It doesn't understand focus rules, filtering or callbacks;
//! it takes the views a widget publishes and writes them with crossterm.
//!
//! ```text
//! PinInput → cells signal → Vec<CellView> → InlineRenderer → Terminal
//! ```
//!
//! # Example
//!
//! ```ignore
//! use spark_pin::renderer::InlineRenderer;
//!
//! let mut renderer = InlineRenderer::new();
//! renderer.render(&mut std::io::stdout(), &pin.views())?;
//! ```

mod inline;

pub use inline::{plain_line, to_color, InlineRenderer};
