//! Sketchline - translate line-oriented drawing commands into SVG.
//!
//! Every non-blank line of the source is one command:
//!
//! ```text
//! DRAW CIRCLE x=10 y=20 radius=5 color=green
//! DRAW RECTANGLE x=0 y=0 width=100 height=50 color=black
//! ```
//!
//! Lines flow through the tokenizer, the command parser and the renderer one
//! at a time. Each rendered fragment is appended to a [`Document`] and each
//! parsed command is written as a small tree to a trace stream.

pub mod config;
pub mod document;
pub mod render;
pub mod trace;

mod error;

pub use document::Document;
pub use error::SketchError;
pub use render::Fragment;
pub use sketchline_parser::{Command, ShapeKind};

use std::io::{self, Write};

use log::{debug, info, warn};

use sketchline_parser::{
    error::{Diagnostic, Severity},
    parse_line,
};

use config::AppConfig;

/// Output of a successful compilation.
#[derive(Debug)]
pub struct Compilation {
    document: Document,
    skipped: Vec<Diagnostic>,
}

impl Compilation {
    /// The finished document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Warnings for lines dropped under the continue-on-error policy.
    pub fn skipped(&self) -> &[Diagnostic] {
        &self.skipped
    }

    /// The serialized SVG.
    pub fn svg(&self) -> String {
        self.document.to_string()
    }
}

/// Builder for compiling Sketchline sources.
///
/// # Examples
///
/// ```rust
/// use sketchline::{SketchBuilder, config::AppConfig};
///
/// let source = "DRAW CIRCLE x=5 y=5 radius=2 color=blue";
///
/// let builder = SketchBuilder::new(AppConfig::default());
/// let mut trace = Vec::new();
/// let compilation = builder
///     .compile(source, &mut trace)
///     .expect("Failed to compile");
///
/// assert!(compilation.svg().contains(r#"<circle cx="5" cy="5" r="2" fill="blue" />"#));
/// assert!(String::from_utf8(trace).unwrap().starts_with("<command>"));
/// ```
#[derive(Default)]
pub struct SketchBuilder {
    config: AppConfig,
}

impl SketchBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compile `source`, writing the trace of every parsed command to `trace`.
    ///
    /// Blank and whitespace-only lines are skipped. The trace for a command
    /// is written before it is rendered, so it appears even when rendering
    /// then fails.
    ///
    /// # Errors
    ///
    /// Returns [`SketchError::Io`] if the trace cannot be written. Unless
    /// `continue_on_error` is set, the first line that fails to parse or
    /// render stops compilation with [`SketchError::Parse`].
    pub fn compile<W: Write + ?Sized>(
        &self,
        source: &str,
        trace: &mut W,
    ) -> Result<Compilation, SketchError> {
        let canvas = self.config.canvas();
        let continue_on_error = self.config.pipeline().continue_on_error();
        info!(
            width = canvas.width(),
            height = canvas.height(),
            continue_on_error;
            "Compiling source"
        );

        let mut document = Document::new(canvas.width(), canvas.height());
        let mut skipped = Vec::new();

        for (index, (offset, line)) in source_lines(source).enumerate() {
            let line_number = index + 1;
            if line.trim().is_empty() {
                continue;
            }

            let command = match parse_line(line, offset) {
                Ok(command) => command,
                Err(diag) => {
                    self.reject(diag, line_number, source, &mut skipped)?;
                    continue;
                }
            };
            debug!(line_number, shape = command.shape(); "Parsed command");

            trace::write_command(trace, &command)?;

            match render::render(&command) {
                Ok(Fragment::Rendered(markup)) => document.push(markup),
                Ok(Fragment::UnknownShape(shape)) => {
                    warn!(line_number, shape = shape.as_str(); "Unknown shape, nothing drawn");
                }
                Err(diag) => self.reject(diag, line_number, source, &mut skipped)?,
            }
        }

        info!(
            fragments = document.fragments().len(),
            skipped = skipped.len();
            "Document complete"
        );

        Ok(Compilation { document, skipped })
    }

    /// Compile `source` and return only the SVG, discarding the trace.
    ///
    /// # Errors
    ///
    /// See [`SketchBuilder::compile`].
    pub fn compile_to_string(&self, source: &str) -> Result<String, SketchError> {
        self.compile(source, &mut io::sink())
            .map(|compilation| compilation.svg())
    }

    /// Apply the failure policy to a failed line.
    fn reject(
        &self,
        diag: Diagnostic,
        line_number: usize,
        source: &str,
        skipped: &mut Vec<Diagnostic>,
    ) -> Result<(), SketchError> {
        if !self.config.pipeline().continue_on_error() {
            return Err(SketchError::new_parse_error(diag.into(), source));
        }

        warn!(line_number, reason = diag.to_string(); "Skipping line");
        skipped.push(diag.with_severity(Severity::Warning));
        Ok(())
    }
}

/// Lines of `source` with their byte offsets, without `\n` or `\r\n`.
fn source_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.split_inclusive('\n').scan(0, |next_offset, raw| {
        let offset = *next_offset;
        *next_offset += raw.len();

        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some((offset, line))
    })
}
