//! CLI logic for the Branchline timeline tool.
//!
//! Reads a JSON description, draws it through [`branchline::DiagramBuilder`]
//! onto an [`SvgSurface`] and saves the document to `--output`.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use branchline::{BranchlineError, DiagramBuilder, export::svg::SvgSurface};

/// Run the Branchline CLI application
///
/// This function processes the input file through the Branchline pipeline
/// and writes the resulting SVG to the output file.
///
/// # Errors
///
/// Returns `BranchlineError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - JSON parsing errors
/// - Validation and layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), BranchlineError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let spec = builder.parse(&source)?;
    let diagram = builder.build(&spec)?;

    let mut surface = SvgSurface::new();
    builder.draw(&diagram, &mut surface)?;
    surface.save(&args.output)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
