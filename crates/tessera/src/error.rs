//! Error types for Tessera layout operations.
//!
//! Structural configuration problems are fatal and reported through
//! [`LayoutError`] before any layout work begins. Per-image data problems
//! are never errors: degenerate images are screened out and reported on the
//! layout result instead, so one bad image cannot fail a whole gallery.

use thiserror::Error;

/// The main error type for layout operations.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("viewport width must be positive, got {0}")]
    InvalidViewport(f32),

    #[error("ideal row height must be positive, got {0}")]
    InvalidRowHeight(f32),

    #[error("gap must be non-negative, got {0}")]
    InvalidGap(f32),

    #[error("group bounds must satisfy 1 <= min <= max, got min {min} and max {max}")]
    InvalidGroupBounds { min: usize, max: usize },
}
