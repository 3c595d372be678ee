//! Shape-to-markup rendering.
//!
//! Each known [`ShapeKind`] has a fixed SVG template. Attribute values are
//! copied into the template verbatim: no escaping, no numeric checks.

use std::fmt;

use sketchline_parser::{
    Command, ShapeKind,
    error::{Diagnostic, ErrorCode},
};

/// Result of rendering one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Markup for a known shape, without a trailing newline.
    Rendered(String),
    /// The command names a shape with no template. Produces no markup.
    UnknownShape(String),
}

impl Fragment {
    /// The markup, or `""` for an unknown shape.
    pub fn markup(&self) -> &str {
        match self {
            Fragment::Rendered(markup) => markup,
            Fragment::UnknownShape(_) => "",
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.markup())
    }
}

/// Render a command to its SVG element.
///
/// An unrecognized shape is not an error and yields
/// [`Fragment::UnknownShape`].
///
/// # Errors
///
/// Returns an [`ErrorCode::E200`] diagnostic naming the first required
/// attribute (in template order) that the command does not supply.
pub fn render(command: &Command) -> Result<Fragment, Diagnostic> {
    let Some(kind) = command.shape_kind() else {
        return Ok(Fragment::UnknownShape(command.shape().to_string()));
    };

    let attr = |key: &str| require(command, kind, key);

    let markup = match kind {
        ShapeKind::Rectangle => format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" />"#,
            attr("x")?,
            attr("y")?,
            attr("width")?,
            attr("height")?,
            attr("color")?,
        ),
        ShapeKind::Circle => format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" />"#,
            attr("x")?,
            attr("y")?,
            attr("radius")?,
            attr("color")?,
        ),
    };

    Ok(Fragment::Rendered(markup))
}

/// Fetch a required attribute or explain which one is missing.
fn require<'a>(command: &'a Command, kind: ShapeKind, key: &str) -> Result<&'a str, Diagnostic> {
    command.attribute(key).ok_or_else(|| {
        let required = kind
            .required_attributes()
            .iter()
            .map(|name| format!("`{name}`"))
            .collect::<Vec<_>>()
            .join(", ");

        Diagnostic::error(format!("`{kind}` is missing attribute `{key}`"))
            .with_code(ErrorCode::E200)
            .with_label(command.span(), format!("add `{key}=...` to this command"))
            .with_secondary_label(command.shape_span(), format!("`{kind}` drawn here"))
            .with_help(format!("`{kind}` requires {required}"))
    })
}
