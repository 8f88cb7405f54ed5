//! Configuration errors.
//!
//! Rejected keystrokes are not errors (they are silently discarded).
//! The only fallible step is turning props into a working widget.

use thiserror::Error;

/// Reasons a pin input configuration cannot be mounted.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `cell_count` was zero.
    #[error("cell count must be at least 1")]
    NoCells,

    /// The acceptance pattern did not compile.
    #[error("invalid acceptance pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An allow-list with no characters would reject everything.
    #[error("allow-list acceptance rule has no characters")]
    EmptyAllowList,
}
