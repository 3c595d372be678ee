//! Parsed commands and the shapes they can draw.

use std::fmt;

use indexmap::IndexMap;

use crate::span::Span;

/// Shapes known to the tokenizer and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Circle,
}

impl ShapeKind {
    /// Every supported shape.
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Rectangle, ShapeKind::Circle];

    /// Look up a shape by its exact source spelling.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The source spelling, e.g. `RECTANGLE`.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "RECTANGLE",
            ShapeKind::Circle => "CIRCLE",
        }
    }

    /// Attributes a command for this shape must supply, in template order.
    pub fn required_attributes(&self) -> &'static [&'static str] {
        match self {
            ShapeKind::Rectangle => &["x", "y", "width", "height", "color"],
            ShapeKind::Circle => &["x", "y", "radius", "color"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One `DRAW` instruction: a shape name and its attributes.
///
/// The shape is kept as written; [`Command::shape_kind`] resolves it.
/// Attributes iterate in first-insertion order, and a repeated key keeps
/// its original position while taking the later value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    shape: String,
    attributes: IndexMap<String, String>,
    span: Span,
    shape_span: Span,
}

impl Command {
    /// Create a command with no attributes.
    ///
    /// The shape span starts out as the whole command span.
    pub fn new(shape: impl Into<String>, span: Span) -> Self {
        Self {
            shape: shape.into(),
            attributes: IndexMap::new(),
            span,
            shape_span: span,
        }
    }

    /// Narrow the shape span to the shape word.
    pub fn with_shape_span(mut self, shape_span: Span) -> Self {
        self.shape_span = shape_span;
        self
    }

    /// Builder-style [`Command::insert`].
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert an attribute, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.attributes.insert(key.into(), value.into())
    }

    pub fn shape(&self) -> &str {
        &self.shape
    }

    /// The shape, if it is one the renderer knows.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        ShapeKind::from_name(&self.shape)
    }

    /// Look up an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    /// Source range of the whole command.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Source range of the shape word.
    pub fn shape_span(&self) -> Span {
        self.shape_span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind_names() {
        assert_eq!(ShapeKind::from_name("RECTANGLE"), Some(ShapeKind::Rectangle));
        assert_eq!(ShapeKind::from_name("CIRCLE"), Some(ShapeKind::Circle));
        assert_eq!(ShapeKind::from_name("circle"), None);
        assert_eq!(ShapeKind::from_name("TRIANGLE"), None);
        assert_eq!(ShapeKind::Circle.to_string(), "CIRCLE");
    }

    #[test]
    fn test_later_duplicate_wins_in_place() {
        let command = Command::new("CIRCLE", Span::default())
            .with_attribute("color", "red")
            .with_attribute("x", "1")
            .with_attribute("color", "blue");

        assert_eq!(command.attribute("color"), Some("blue"));
        assert_eq!(command.attribute_count(), 2);
        assert_eq!(
            command.attributes().collect::<Vec<_>>(),
            vec![("color", "blue"), ("x", "1")]
        );
    }

    #[test]
    fn test_unknown_shape_is_kept_verbatim() {
        let command = Command::new("TRIANGLE", Span::default());

        assert_eq!(command.shape(), "TRIANGLE");
        assert_eq!(command.shape_kind(), None);
        assert_eq!(command.attribute("x"), None);
    }

    #[test]
    fn test_shape_span_defaults_to_command_span() {
        let command = Command::new("CIRCLE", Span::new(3..20));
        assert_eq!(command.shape_span(), Span::new(3..20));

        let command = command.with_shape_span(Span::new(8..14));
        assert_eq!(command.shape_span(), Span::new(8..14));
        assert_eq!(command.span(), Span::new(3..20));
    }
}
