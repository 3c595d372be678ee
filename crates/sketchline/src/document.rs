//! The SVG document assembled from rendered fragments.

use std::fmt;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// An ordered list of markup fragments inside a fixed-size `<svg>` root.
///
/// Formatting with [`Display`](fmt::Display) yields the finished document:
/// the opening tag on its own line, one line per fragment, then `</svg>`
/// with no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    width: u32,
    height: u32,
    fragments: Vec<String>,
}

impl Document {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            fragments: Vec::new(),
        }
    }

    /// Append a fragment. Empty fragments are not stored.
    pub fn push(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The opening `<svg>` tag.
    pub fn header(&self) -> String {
        format!(
            r#"<svg xmlns="{SVG_NAMESPACE}" width="{}" height="{}">"#,
            self.width, self.height
        )
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for fragment in &self.fragments {
            writeln!(f, "{fragment}")?;
        }
        write!(f, "</svg>")
    }
}
