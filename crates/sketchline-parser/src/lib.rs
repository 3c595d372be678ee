//! # Sketchline Parser
//!
//! Tokenizer and command parser for the Sketchline drawing language. Each
//! line of source holds one command:
//!
//! ```text
//! DRAW <SHAPE> key=value key=value ...
//! ```
//!
//! ## Usage
//!
//! ```
//! # use sketchline_parser::{parse_line, ShapeKind};
//! let command = parse_line("DRAW CIRCLE x=5 y=5 radius=2 color=blue", 0)
//!     .expect("valid command");
//!
//! assert_eq!(command.shape_kind(), Some(ShapeKind::Circle));
//! assert_eq!(command.attribute("radius"), Some("2"));
//! ```

pub mod command;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod tokens;

pub use command::{Command, ShapeKind};
pub use span::Span;
pub use tokens::{Lexeme, Token, TokenKind};

use error::Diagnostic;

/// Tokenize and parse one line of source.
///
/// `offset` is the byte position of `line` within the full source; every
/// span in the result, or in the returned diagnostic, is relative to the
/// full source.
///
/// # Errors
///
/// Returns a [`Diagnostic`] when the line is not a complete command.
pub fn parse_line(line: &str, offset: usize) -> Result<Command, Diagnostic> {
    let tokens = lexer::tokenize(line, offset);
    parser::parse_command(&tokens, content_span(line, offset))
}

/// Span of `line` without leading and trailing whitespace.
pub fn content_span(line: &str, offset: usize) -> Span {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Span::new(offset..offset);
    }
    let start = offset + (line.len() - line.trim_start().len());
    Span::new(start..start + trimmed.len())
}
