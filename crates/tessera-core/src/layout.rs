//! The computed layout result returned by every engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// A complete gallery layout: one rectangle per laid-out image, keyed by the
/// image's index in the original input sequence.
///
/// The map is ordered so iteration (and serialized output) is deterministic.
/// A layout is computed fresh on every engine invocation and never mutated
/// after it is returned; the caller owns rendering and persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Tile geometry keyed by original image index.
    tiles: BTreeMap<usize, Rect>,

    /// Total height of the layout, for sizing the containing element.
    total_height: f32,

    /// Indices excluded from layout because their dimensions were degenerate.
    #[serde(default)]
    skipped: Vec<usize>,
}

impl Layout {
    /// Creates an empty layout with zero height
    pub fn new() -> Self {
        Self::default()
    }

    /// Places the rectangle for the image at the given original index
    pub fn insert(&mut self, index: usize, rect: Rect) {
        self.tiles.insert(index, rect);
    }

    /// Sets the total layout height
    pub fn set_total_height(&mut self, total_height: f32) {
        self.total_height = total_height;
    }

    /// Records the indices that were screened out before layout
    pub fn record_skipped(&mut self, skipped: Vec<usize>) {
        self.skipped = skipped;
    }

    /// Returns the rectangle for an original image index, if it was laid out
    pub fn tile(&self, index: usize) -> Option<Rect> {
        self.tiles.get(&index).copied()
    }

    /// Returns all tiles keyed by original image index
    pub fn tiles(&self) -> &BTreeMap<usize, Rect> {
        &self.tiles
    }

    /// Returns the total layout height
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// Returns the indices excluded as degenerate input
    pub fn skipped(&self) -> &[usize] {
        &self.skipped
    }

    /// Returns the number of laid-out tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Returns true if no tiles were laid out
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
