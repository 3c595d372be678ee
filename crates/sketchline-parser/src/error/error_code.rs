//! Error codes for the Sketchline diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Command parser errors
//! - `E2xx` - Rendering errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// A token of the wrong kind sits at a fixed position of the command,
    /// e.g. a command that does not start with `DRAW`.
    E100,

    /// Truncated command.
    ///
    /// The line ended before a complete command was read: the keyword or
    /// shape is missing, or the last attribute key has no value.
    E101,

    // =========================================================================
    // Render Errors (E2xx)
    // =========================================================================
    /// Missing attribute.
    ///
    /// A shape was drawn without one of the attributes its template requires.
    E200,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E101").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
