//! Tokenizer for a single line of Sketchline source.
//!
//! A line is split on whitespace and every word is classified into a
//! [`Lexeme`]. [`scan`] returns every outcome, including ignored words;
//! [`tokenize`] flattens the recognized ones into the [`Token`] stream the
//! [`parser`](super::parser) consumes. Neither keeps state between lines.

use std::ops::Range;

use log::debug;
use winnow::{
    ModalResult, Parser as _,
    combinator::{preceded, repeat, terminated},
    stream::LocatingSlice,
    token::{take_till, take_while},
};

use crate::{
    command::ShapeKind,
    span::Span,
    tokens::{KEYWORD_DRAW, Lexeme, Token, TokenKind},
};

type Input<'a> = LocatingSlice<&'a str>;

fn whitespace0(input: &mut Input<'_>) -> ModalResult<()> {
    take_while(0.., |c: char| c.is_whitespace())
        .void()
        .parse_next(input)
}

/// One maximal run of non-whitespace characters and its range in the line.
fn word<'a>(input: &mut Input<'a>) -> ModalResult<(&'a str, Range<usize>)> {
    preceded(
        whitespace0,
        take_till(1.., |c: char| c.is_whitespace()).with_span(),
    )
    .parse_next(input)
}

fn words<'a>(input: &mut Input<'a>) -> ModalResult<Vec<(&'a str, Range<usize>)>> {
    terminated(repeat(0.., word), whitespace0).parse_next(input)
}

/// Classify a single word found at `span`.
pub fn classify(word: &str, span: Span) -> Lexeme<'_> {
    if word == KEYWORD_DRAW {
        return Lexeme::Recognized(Token::new(TokenKind::Keyword, word, span));
    }

    if ShapeKind::from_name(word).is_some() {
        return Lexeme::Recognized(Token::new(TokenKind::ShapeName, word, span));
    }

    if let Some((key, value)) = word.split_once('=') {
        let key_end = span.start() + key.len();
        return Lexeme::Attribute {
            key: Token::new(
                TokenKind::AttributeKey,
                key,
                Span::new(span.start()..key_end),
            ),
            value: Token::new(
                TokenKind::AttributeValue,
                value,
                Span::new(key_end + 1..span.end()),
            ),
        };
    }

    Lexeme::Ignored { word, span }
}

/// Classify every word of `line`.
///
/// `offset` is the byte position of the line within the whole source, so
/// that spans point into the full text.
pub fn scan(line: &str, offset: usize) -> Vec<Lexeme<'_>> {
    let mut input = LocatingSlice::new(line);
    // `word` only ever backtracks, which `repeat` absorbs.
    let found = words(&mut input).unwrap_or_default();

    found
        .into_iter()
        .map(|(word, range)| classify(word, Span::new(range).shifted(offset)))
        .collect()
}

/// Tokenize `line`, dropping words that are neither keywords, shape names,
/// nor `key=value` pairs.
pub fn tokenize(line: &str, offset: usize) -> Vec<Token<'_>> {
    scan(line, offset)
        .into_iter()
        .inspect(|lexeme| {
            if let Lexeme::Ignored { word, span } = lexeme {
                debug!(word = *word, span:% = span; "Ignoring unrecognized word");
            }
        })
        .flat_map(Lexeme::into_tokens)
        .collect()
}
