//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A labeled span in source code.
///
/// Primary labels mark the token or command at fault; secondary labels add
/// context, such as the shape word of a command missing an attribute.
///
/// ```text
/// error[E200]: `RECTANGLE` is missing attribute `color`
///   |
/// 3 | DRAW RECTANGLE x=0 y=0 width=10 height=10
///   | -----^^^^^^^^^-------------------------------
///   |      |        |
///   |      |        add `color=...` to this command
///   |      `RECTANGLE` drawn here
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Check if this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label() {
        let label = Label::primary(Span::new(10..20), "unexpected `x`");

        assert_eq!(label.span(), Span::new(10..20));
        assert_eq!(label.message(), "unexpected `x`");
        assert!(label.is_primary());
        assert!(!label.is_secondary());
    }

    #[test]
    fn test_secondary_label() {
        let label = Label::secondary(Span::new(5..14), "shape declared here");

        assert_eq!(label.span().start(), 5);
        assert_eq!(label.span().end(), 14);
        assert!(label.is_secondary());
    }
}
