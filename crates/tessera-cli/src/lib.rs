//! CLI logic for the Tessera layout tool.
//!
//! Reads a gallery description (JSON list of natural image dimensions),
//! runs the selected layout strategy, and writes the computed geometry as
//! JSON. This is exactly the call pattern a rendering layer would use.

mod args;
mod config;
mod error;

pub use args::{Args, Strategy};
pub use error::CliError;

use std::fs;

use log::info;

use tessera::GridBuilder;
use tessera::item::ImageSource;

/// Run the Tessera CLI application
///
/// This function reads the input gallery, computes the layout with the
/// selected strategy, and writes the resulting geometry to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Malformed gallery or configuration files
/// - Layout configuration errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        strategy:? = args.strategy;
        "Computing gallery layout"
    );

    // Load configuration
    let grid_config = config::load_config(args.config.as_ref())?;

    // Read input gallery
    let source_json = fs::read_to_string(&args.input)?;
    let sources: Vec<ImageSource> = serde_json::from_str(&source_json)?;
    info!(image_count = sources.len(); "Gallery loaded");

    // Compute the layout using the GridBuilder API
    let builder = GridBuilder::new(grid_config);
    let layout = match (args.strategy, args.seed) {
        (Strategy::Justified, _) => builder.justified(&sources, args.width)?,
        (Strategy::Mosaic, Some(seed)) => builder.mosaic_seeded(&sources, args.width, seed)?,
        (Strategy::Mosaic, None) => builder.mosaic(&sources, args.width)?,
    };

    // Write output file
    let layout_json = serde_json::to_string_pretty(&layout)?;
    fs::write(&args.output, layout_json)?;

    info!(
        output_file = args.output,
        tile_count = layout.len(),
        total_height = layout.total_height() as f64;
        "Layout exported successfully"
    );

    Ok(())
}
