//! Token and lexeme types produced by the [`lexer`](super::lexer).

use std::fmt;

use crate::span::Span;

/// The only keyword of the language.
pub const KEYWORD_DRAW: &str = "DRAW";

/// Kind of a recognized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `DRAW`
    Keyword,
    /// `RECTANGLE` or `CIRCLE`
    ShapeName,
    /// The part of `key=value` before the first `=`.
    AttributeKey,
    /// The part of `key=value` after the first `=`.
    AttributeValue,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "keyword",
            TokenKind::ShapeName => "shape name",
            TokenKind::AttributeKey => "attribute key",
            TokenKind::AttributeValue => "attribute value",
        };
        f.write_str(name)
    }
}

/// A recognized token borrowing its text from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    kind: TokenKind,
    text: &'src str,
    span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Self { kind, text, span }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

/// Outcome of classifying one whitespace-separated word.
///
/// Unrecognized words are not an error: they become [`Lexeme::Ignored`] and
/// are dropped from the token stream. Keeping them as a variant lets callers
/// report them if they want to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme<'src> {
    /// A keyword or shape name.
    Recognized(Token<'src>),
    /// A `key=value` word, split at its first `=`.
    Attribute {
        key: Token<'src>,
        value: Token<'src>,
    },
    /// Anything else.
    Ignored { word: &'src str, span: Span },
}

impl<'src> Lexeme<'src> {
    /// The tokens this lexeme contributes to the token stream, in order.
    pub fn into_tokens(self) -> impl Iterator<Item = Token<'src>> {
        let (first, second) = match self {
            Lexeme::Recognized(token) => (Some(token), None),
            Lexeme::Attribute { key, value } => (Some(key), Some(value)),
            Lexeme::Ignored { .. } => (None, None),
        };
        first.into_iter().chain(second)
    }
}
