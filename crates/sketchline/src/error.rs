//! Error types for Sketchline operations.
//!
//! This module provides the main error type [`SketchError`] which wraps
//! the conditions that can stop a compilation.

use std::io;

use thiserror::Error;

use sketchline_parser::error::ParseError;

/// The main error type for Sketchline operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the diagnostics of the failing line together
/// with the full source, so callers can render snippets.
#[derive(Debug, Error)]
pub enum SketchError {
    /// Input or output could not be acquired, or the trace could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line could not be parsed or rendered.
    #[error("{err}")]
    Parse { err: ParseError, src: String },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SketchError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
