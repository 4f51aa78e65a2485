//! Error types for the Tessera CLI.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

use tessera::LayoutError;

/// Errors surfaced to the terminal by the CLI.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid gallery input: {0}")]
    #[diagnostic(help("the input must be a JSON list of {{\"natural_width\", \"natural_height\"}} objects"))]
    Input(#[from] serde_json::Error),

    #[error("invalid configuration file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("layout failed: {0}")]
    Layout(#[from] LayoutError),
}
