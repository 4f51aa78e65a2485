//! Justified-row layout engine.
//!
//! Assigns images to rows of roughly equal height and stretches every row to
//! exactly fill the viewport width. Row membership comes from the linear
//! partitioner over integer-scaled aspect ratios, so wide and narrow images
//! balance out across rows instead of piling into one.

use log::debug;

use tessera_core::{geometry::Rect, item::ImageItem, layout::Layout};

use crate::{config::JustifiedConfig, error::LayoutError, partition::partition};

/// Aspect ratios are scaled by this factor into integer partition weights.
const WEIGHT_SCALE: f32 = 100.0;

/// Justified-row layout engine.
///
/// Rows are never re-ordered: images appear left-to-right, top-to-bottom in
/// their original sequence. Within a row all tiles share one height; widths
/// vary with each image's aspect ratio so that widths plus gaps fill the
/// viewport exactly, up to integer-floor rounding of at most one pixel per
/// tile.
pub struct Engine {
    ideal_height: f32,
    gap: f32,
}

impl Engine {
    /// Create a new justified engine with default parameters
    pub fn new() -> Self {
        Self::from_config(&JustifiedConfig::default())
    }

    /// Create a justified engine from a configuration section
    pub fn from_config(config: &JustifiedConfig) -> Self {
        Self {
            ideal_height: config.ideal_height(),
            gap: config.gap(),
        }
    }

    /// Set the target row height
    pub fn set_ideal_height(&mut self, ideal_height: f32) -> &mut Self {
        self.ideal_height = ideal_height;
        self
    }

    /// Set the spacing between adjacent tiles
    pub fn set_gap(&mut self, gap: f32) -> &mut Self {
        self.gap = gap;
        self
    }

    fn validate(&self, viewport_width: f32) -> Result<(), LayoutError> {
        if viewport_width.is_nan() || viewport_width <= 0.0 {
            return Err(LayoutError::InvalidViewport(viewport_width));
        }
        if self.ideal_height.is_nan() || self.ideal_height <= 0.0 {
            return Err(LayoutError::InvalidRowHeight(self.ideal_height));
        }
        if self.gap.is_nan() || self.gap < 0.0 {
            return Err(LayoutError::InvalidGap(self.gap));
        }
        Ok(())
    }

    /// Compute the justified layout for the given items.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the viewport width, ideal height, or gap
    /// is out of range. An empty item slice is not an error: it produces an
    /// empty layout with zero height.
    pub fn calculate(
        &self,
        items: &[ImageItem],
        viewport_width: f32,
    ) -> Result<Layout, LayoutError> {
        self.validate(viewport_width)?;

        let mut layout = Layout::new();
        if items.is_empty() {
            return Ok(layout);
        }

        // Estimate how many ideal-height rows the gallery would occupy, then
        // let the partitioner balance the images across that many rows.
        let summed_width: f32 = items
            .iter()
            .map(|item| item.aspect_ratio() * self.ideal_height + self.gap)
            .sum();
        let row_count = ((summed_width / viewport_width).round() as usize).max(1);

        let weights: Vec<u64> = items
            .iter()
            .map(|item| ((item.aspect_ratio() * WEIGHT_SCALE).round() as u64).max(1))
            .collect();
        let rows = partition(&weights, row_count);

        debug!(
            item_count = items.len(),
            row_count = rows.len(),
            viewport_width = viewport_width as f64;
            "Calculated row assignment"
        );

        let mut y = 0.0_f32;
        let mut start = 0_usize;
        for row in &rows {
            let members = &items[start..start + row.len()];
            start += row.len();

            let summed_ratios: f32 = members.iter().map(|item| item.aspect_ratio()).sum();
            let distributable = viewport_width - (members.len() - 1) as f32 * self.gap;

            // A vanishing ratio sum would divide to infinity; emit zero-size
            // tiles for the row instead.
            let row_height = if summed_ratios > 0.0 && distributable > 0.0 {
                (distributable / summed_ratios).floor()
            } else {
                0.0
            };

            let mut x = 0.0_f32;
            for item in members {
                let width = if summed_ratios > 0.0 && distributable > 0.0 {
                    (distributable / summed_ratios * item.aspect_ratio()).floor()
                } else {
                    0.0
                };
                layout.insert(item.index(), Rect::new(x, y, width, row_height));
                x += width + self.gap;
            }

            y += row_height + self.gap;
        }

        layout.set_total_height((y - self.gap).max(0.0));
        Ok(layout)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use tessera_core::item::{ImageSource, validate_sources};

    use super::*;

    fn ratio_strategy() -> impl Strategy<Value = Vec<f32>> {
        proptest::collection::vec(0.3f32..3.5, 1..40)
    }

    /// Every input image gets exactly one tile, and per-row widths plus gaps
    /// fill the viewport within one pixel per tile.
    fn check_justified_invariants(
        ratios: Vec<f32>,
        viewport: f32,
        gap: f32,
    ) -> Result<(), TestCaseError> {
        let sources: Vec<ImageSource> = ratios
            .iter()
            .map(|&ratio| ImageSource::new(ratio * 800.0, 800.0))
            .collect();
        let (items, _) = validate_sources(&sources);

        let mut engine = Engine::new();
        engine.set_ideal_height(240.0).set_gap(gap);
        let layout = engine
            .calculate(&items, viewport)
            .expect("valid configuration");

        prop_assert_eq!(layout.len(), ratios.len());

        let mut row_tops: Vec<f32> = layout.tiles().values().map(|tile| tile.y()).collect();
        row_tops.dedup();
        for &top in &row_tops {
            let row_tiles: Vec<_> = layout
                .tiles()
                .values()
                .filter(|tile| tile.y() == top)
                .collect();
            let widths: f32 = row_tiles.iter().map(|tile| tile.width()).sum();
            let gaps = (row_tiles.len() - 1) as f32 * gap;
            let tolerance = row_tiles.len() as f32;
            prop_assert!((widths + gaps - viewport).abs() <= tolerance);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn prop_justified_invariants(
            ratios in ratio_strategy(),
            viewport in 320.0f32..2560.0,
            gap in 0.0f32..16.0,
        ) {
            check_justified_invariants(ratios, viewport, gap)?;
        }
    }
}
