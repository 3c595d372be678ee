//! CLI logic for the Sketchline drawing tool.
//!
//! This module owns the file handling around the library: it reads the
//! input, creates the output, streams the trace to stdout, and writes the
//! finished SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs::{self, File},
    io::{self, Write},
};

use log::{info, warn};

use sketchline::{SketchBuilder, SketchError};

use error_adapter::diagnostics_to_reportables;

/// Run the Sketchline CLI application
///
/// Both files are acquired before any line is processed. The parse trace
/// goes to stdout; warnings for skipped lines go to the log.
///
/// # Errors
///
/// Returns `SketchError` for:
/// - Input that cannot be read or output that cannot be created
/// - Configuration loading errors
/// - The first failing line, unless `--continue-on-error` is set
pub fn run(args: &Args) -> Result<(), SketchError> {
    let mut trace = io::stdout().lock();
    run_with_trace(args, &mut trace)?;
    trace.flush()?;
    Ok(())
}

/// [`run`] with the parse trace written to `trace` instead of stdout.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_trace<W: Write + ?Sized>(args: &Args, trace: &mut W) -> Result<(), SketchError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing drawing"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.continue_on_error {
        app_config = app_config.with_continue_on_error(true);
    }

    let source = fs::read_to_string(&args.input)?;
    let mut output = File::create(&args.output)?;

    let builder = SketchBuilder::new(app_config);
    let compilation = builder.compile(&source, trace)?;

    for reportable in diagnostics_to_reportables(compilation.skipped(), &source) {
        warn!("{}", error_adapter::render(&reportable));
    }

    output.write_all(compilation.svg().as_bytes())?;

    info!(output_file = args.output; "SVG exported successfully");
    println!("SVG generated in {}", args.output);

    Ok(())
}
