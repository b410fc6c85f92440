//! Error type for the mode dispatcher.

use thiserror::Error;

/// Errors raised by this crate.
///
/// Only mode resolution can fail. Every reducer and threshold helper is
/// total over its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    #[error("unknown logic mode: '{mode}'. Supported modes: {supported}")]
    /// The requested mode name is not one of the supported modes.
    UnknownMode {
        /// The normalized (trimmed, upper-cased) name that was looked up.
        mode: String,
        /// Comma-separated list of every supported mode name.
        supported: String,
    },
}
