//! Error and diagnostic system for the Sketchline parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. The diagnostic that rejects a whole source is
//! wrapped in [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use sketchline_parser::error::{Diagnostic, ErrorCode};
//! # use sketchline_parser::Span;
//!
//! let span = Span::new(0..14);
//!
//! let diag = Diagnostic::error("command ends before its shape name")
//!     .with_code(ErrorCode::E101)
//!     .with_label(span, "expected a shape after `DRAW`")
//!     .with_help("write a command as `DRAW <SHAPE> key=value ...`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
