//! Error types for rich text rendering.
//!
//! Malformed markup is never an error: the parser degrades to literal text
//! instead. The only failure a collaborator can report is a color value that
//! cannot be resolved, which the parser turns into "no span for this pair".

use thiserror::Error;

/// Errors that can occur when resolving a `<color=...>` attribute.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The attribute was empty or whitespace only.
    #[error("empty color value")]
    Empty,

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}
