//! Human-readable parse tree written for every parsed command.

use std::io::{self, Write};

use sketchline_parser::Command;

/// Write the tree for `command`, followed by a blank separator line.
///
/// ```text
/// <command>
/// ├── shape: CIRCLE
/// ├── x: 5
/// ├── color: blue
/// ```
pub fn write_command<W: Write + ?Sized>(out: &mut W, command: &Command) -> io::Result<()> {
    writeln!(out, "<command>")?;
    writeln!(out, "├── shape: {}", command.shape())?;
    for (key, value) in command.attributes() {
        writeln!(out, "├── {key}: {value}")?;
    }
    writeln!(out)
}
