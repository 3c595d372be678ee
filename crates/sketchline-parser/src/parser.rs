//! Positional parser turning one line's tokens into a [`Command`].
//!
//! The grammar is fixed: `DRAW <SHAPE> (<key> <value>)*`. The parser walks
//! the token stream once, checking each position's [`TokenKind`], with no
//! backtracking.
//!
//! The second position must be a shape name token, not just any token.
//! A line such as `DRAW DRAW x=1 y=2` is rejected with [`ErrorCode::E100`]
//! instead of producing a command whose shape is `DRAW`. Since the tokenizer
//! only emits shape tokens for known shapes, every parsed command names a
//! shape the renderer has a template for.

use log::{debug, trace};
use winnow::stream::{Stream, TokenSlice};

use crate::{
    command::{Command, ShapeKind},
    error::{Diagnostic, ErrorCode, Result},
    span::Span,
    tokens::{KEYWORD_DRAW, Token, TokenKind},
};

type Input<'t, 'src> = TokenSlice<'t, Token<'src>>;

const GRAMMAR_HELP: &str = "write a command as `DRAW <SHAPE> key=value ...`";

/// Parse the tokens of a single line.
///
/// `line` is the span of the line's content; it is used as the command span
/// and labels errors that have no token to point at.
///
/// # Errors
///
/// - [`ErrorCode::E101`] when the keyword, the shape, or the value of the
///   last attribute is missing.
/// - [`ErrorCode::E100`] when a token of the wrong kind occupies a position,
///   e.g. a line not starting with `DRAW`.
pub fn parse_command(tokens: &[Token<'_>], line: Span) -> Result<Command> {
    let mut input = TokenSlice::new(tokens);

    expect(&mut input, TokenKind::Keyword, line)?;
    let shape = expect(&mut input, TokenKind::ShapeName, line)?;

    let mut command = Command::new(shape.text(), line).with_shape_span(shape.span());

    while input.eof_offset() > 0 {
        let key = expect(&mut input, TokenKind::AttributeKey, line)?;
        let value = expect(&mut input, TokenKind::AttributeValue, key.span())?;

        if let Some(previous) = command.insert(key.text(), value.text()) {
            debug!(
                key = key.text(),
                previous = previous.as_str(),
                value = value.text();
                "Attribute given twice, keeping the later value"
            );
        }
    }

    trace!(command:?; "Parsed command");
    Ok(command)
}

/// Consume one token, which must be of `kind`.
fn expect<'t, 'src>(
    input: &mut Input<'t, 'src>,
    kind: TokenKind,
    context: Span,
) -> Result<&'t Token<'src>> {
    match input.next_token() {
        Some(token) if token.kind() == kind => Ok(token),
        Some(token) => Err(unexpected_token(token, kind)),
        None => Err(truncated_command(kind, context)),
    }
}

fn expected_description(kind: TokenKind) -> String {
    match kind {
        TokenKind::Keyword => format!("`{KEYWORD_DRAW}`"),
        TokenKind::ShapeName => {
            let names: Vec<_> = ShapeKind::ALL
                .iter()
                .map(|shape| format!("`{}`", shape.name()))
                .collect();
            format!("a shape name ({})", names.join(" or "))
        }
        TokenKind::AttributeKey => "an attribute (`key=value`)".to_string(),
        TokenKind::AttributeValue => "an attribute value".to_string(),
    }
}

fn unexpected_token(found: &Token<'_>, expected: TokenKind) -> Diagnostic {
    Diagnostic::error(format!(
        "expected {}, found {} `{}`",
        expected_description(expected),
        found.kind(),
        found.text()
    ))
    .with_code(ErrorCode::E100)
    .with_label(found.span(), format!("unexpected {}", found.kind()))
    .with_help(GRAMMAR_HELP)
}

fn truncated_command(expected: TokenKind, context: Span) -> Diagnostic {
    let (message, label) = match expected {
        TokenKind::Keyword => (
            "command has no recognizable words".to_string(),
            "nothing here is `DRAW`, a shape, or `key=value`",
        ),
        TokenKind::AttributeValue => (
            "attribute has no value".to_string(),
            "this key is missing its value",
        ),
        _ => (
            format!(
                "command ends before {}",
                expected_description(expected)
            ),
            "command ends here",
        ),
    };

    Diagnostic::error(message)
        .with_code(ErrorCode::E101)
        .with_label(context, label)
        .with_help(GRAMMAR_HELP)
}
