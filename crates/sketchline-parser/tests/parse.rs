use sketchline_parser::{
    Lexeme, ShapeKind, Span, TokenKind,
    error::{ErrorCode, ParseError},
    lexer, parse_line,
};

#[test]
fn test_circle_line() {
    let command = parse_line("DRAW CIRCLE x=5 y=5 radius=2 color=blue", 0).expect("Failed to parse");

    assert_eq!(command.shape_kind(), Some(ShapeKind::Circle));
    assert_eq!(command.attribute("x"), Some("5"));
    assert_eq!(command.attribute("y"), Some("5"));
    assert_eq!(command.attribute("radius"), Some("2"));
    assert_eq!(command.attribute("color"), Some("blue"));
}

#[test]
fn test_values_are_not_interpreted() {
    let command = parse_line("DRAW RECTANGLE x=1e3 y=-7 width=50% height=\"4\" color=#ff00ff", 0)
        .expect("Failed to parse");

    assert_eq!(command.attribute("x"), Some("1e3"));
    assert_eq!(command.attribute("width"), Some("50%"));
    assert_eq!(command.attribute("height"), Some("\"4\""));
    assert_eq!(command.attribute("color"), Some("#ff00ff"));
}

#[test]
fn test_scan_then_tokenize_counts() {
    let line = "DRAW CIRCLE big x=1 round";
    let lexemes = lexer::scan(line, 0);
    let tokens = lexer::tokenize(line, 0);

    let ignored: Vec<_> = lexemes
        .iter()
        .filter_map(|lexeme| match lexeme {
            Lexeme::Ignored { word, .. } => Some(*word),
            _ => None,
        })
        .collect();

    assert_eq!(ignored, vec!["big", "round"]);
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[2].kind(), TokenKind::AttributeKey);
}

#[test]
fn test_error_spans_point_into_full_source() {
    let source = "DRAW CIRCLE x=1 y=1 radius=1 color=red\nDRAW\n";
    let second_line_offset = source.find("DRAW\n").expect("second line");

    let err = parse_line("DRAW", second_line_offset).unwrap_err();

    assert_eq!(err.code(), Some(ErrorCode::E101));
    assert_eq!(
        err.labels()[0].span(),
        Span::new(second_line_offset..second_line_offset + 4)
    );

    let wrapped: ParseError = err.into();
    assert_eq!(wrapped.diagnostics().len(), 1);
}
