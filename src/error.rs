//! Error types for strapi-richtext.
//!
//! Rendering itself never fails. These errors only surface at the input
//! boundary: reading a file or stream, or decoding syntactically broken JSON.

use std::io;
use thiserror::Error;

/// Result type alias for strapi-richtext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a rich-text document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files or streams.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error at an integration boundary (FFI, CLI).
    #[error("Rendering error: {0}")]
    Render(String),
}
