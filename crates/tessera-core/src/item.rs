//! The image model consumed by the layout engines.
//!
//! Callers supply [`ImageSource`] values with the natural dimensions they
//! resolved upstream (the engines never measure anything themselves).
//! Validation turns them into [`ImageItem`] values carrying a stable index
//! into the original sequence; items with degenerate dimensions are screened
//! out so one bad image never fails a whole gallery.

use serde::{Deserialize, Serialize};

/// Caller-supplied image dimensions, prior to validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    /// Natural (intrinsic) width in pixels.
    pub natural_width: f32,
    /// Natural (intrinsic) height in pixels.
    pub natural_height: f32,
}

impl ImageSource {
    pub fn new(natural_width: f32, natural_height: f32) -> Self {
        Self {
            natural_width,
            natural_height,
        }
    }
}

/// A validated image together with its position in the original sequence.
///
/// Construction guarantees both dimensions are finite and positive, so the
/// aspect ratio is always a finite positive number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageItem {
    index: usize,
    natural_width: f32,
    natural_height: f32,
}

impl ImageItem {
    /// Validates a source at the given original index.
    ///
    /// Returns `None` when either dimension is non-positive or non-finite.
    pub fn from_source(index: usize, source: ImageSource) -> Option<Self> {
        let valid = source.natural_width.is_finite()
            && source.natural_height.is_finite()
            && source.natural_width > 0.0
            && source.natural_height > 0.0;

        valid.then_some(Self {
            index,
            natural_width: source.natural_width,
            natural_height: source.natural_height,
        })
    }

    /// Returns the item's index in the original image sequence
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the natural width in pixels
    pub fn natural_width(self) -> f32 {
        self.natural_width
    }

    /// Returns the natural height in pixels
    pub fn natural_height(self) -> f32 {
        self.natural_height
    }

    /// Returns the intrinsic width-to-height ratio
    pub fn aspect_ratio(self) -> f32 {
        self.natural_width / self.natural_height
    }
}

/// Screens a source sequence into validated items plus the skipped indices.
///
/// Original order is preserved in both outputs. The skipped indices let the
/// caller decide whether to render placeholders for the excluded images.
pub fn validate_sources(sources: &[ImageSource]) -> (Vec<ImageItem>, Vec<usize>) {
    let mut items = Vec::with_capacity(sources.len());
    let mut skipped = Vec::new();

    for (index, source) in sources.iter().enumerate() {
        match ImageItem::from_source(index, *source) {
            Some(item) => items.push(item),
            None => skipped.push(index),
        }
    }

    (items, skipped)
}
