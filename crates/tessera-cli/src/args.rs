//! Command-line argument definitions for the Tessera CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the layout
//! strategy, viewport width, mosaic seeding, configuration file selection,
//! and logging verbosity.

use clap::{Parser, ValueEnum};

/// Which layout strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Rows of roughly equal height justified to the viewport width.
    Justified,
    /// Randomized groups pairing contrasting aspect ratios into columns.
    Mosaic,
}

/// Command-line arguments for the Tessera layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input gallery JSON (a list of natural dimensions)
    #[arg(help = "Path to the input gallery file")]
    pub input: String,

    /// Path to the output layout JSON file
    #[arg(short, long, default_value = "layout.json")]
    pub output: String,

    /// Layout strategy to apply
    #[arg(short, long, value_enum, default_value = "justified")]
    pub strategy: Strategy,

    /// Viewport width in pixels
    #[arg(short, long, default_value_t = 1200.0)]
    pub width: f32,

    /// Seed for the mosaic strategy (omit for a fresh random grouping)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
