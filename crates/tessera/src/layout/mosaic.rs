//! Mosaic layout engine.
//!
//! Cuts the gallery into randomly sized groups, pairs contrasting aspect
//! ratios within each group into stacked columns, and scales every group to
//! fill the viewport width. The randomness (group sizing and clique
//! sub-layout selection) comes from an injected generator: production
//! callers can use a fresh generator per render for visual variety, while
//! tests and reproducible pipelines seed one explicitly.

mod compositor;
mod grouper;

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use tessera_core::{item::ImageItem, layout::Layout};

use crate::{config::MosaicConfig, error::LayoutError};

/// Mosaic layout engine.
pub struct Engine {
    min_per_group: usize,
    max_per_group: usize,
    gap: f32,
}

impl Engine {
    /// Create a new mosaic engine with default parameters
    pub fn new() -> Self {
        Self::from_config(&MosaicConfig::default())
    }

    /// Create a mosaic engine from a configuration section
    pub fn from_config(config: &MosaicConfig) -> Self {
        Self {
            min_per_group: config.min_per_group(),
            max_per_group: config.max_per_group(),
            gap: config.gap(),
        }
    }

    /// Set the smallest number of images per group
    pub fn set_min_per_group(&mut self, min_per_group: usize) -> &mut Self {
        self.min_per_group = min_per_group;
        self
    }

    /// Set the largest number of images per group
    pub fn set_max_per_group(&mut self, max_per_group: usize) -> &mut Self {
        self.max_per_group = max_per_group;
        self
    }

    /// Set the spacing between adjacent components and groups
    pub fn set_gap(&mut self, gap: f32) -> &mut Self {
        self.gap = gap;
        self
    }

    fn validate(&self, viewport_width: f32) -> Result<(), LayoutError> {
        if viewport_width.is_nan() || viewport_width <= 0.0 {
            return Err(LayoutError::InvalidViewport(viewport_width));
        }
        if self.min_per_group == 0 || self.min_per_group > self.max_per_group {
            return Err(LayoutError::InvalidGroupBounds {
                min: self.min_per_group,
                max: self.max_per_group,
            });
        }
        if self.gap.is_nan() || self.gap < 0.0 {
            return Err(LayoutError::InvalidGap(self.gap));
        }
        Ok(())
    }

    /// Compute a mosaic layout with an ambient random source.
    ///
    /// Each call draws a fresh grouping, so repeated renders of the same
    /// gallery vary. Use [`Engine::calculate_seeded`] when the output must
    /// be reproducible.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the viewport width, group bounds, or gap
    /// is out of range.
    pub fn calculate(
        &self,
        items: &[ImageItem],
        viewport_width: f32,
    ) -> Result<Layout, LayoutError> {
        self.calculate_with_rng(items, viewport_width, &mut rand::rng())
    }

    /// Compute a mosaic layout from a seed, deterministically.
    ///
    /// Two calls with identical items, viewport, and seed produce identical
    /// layouts.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the viewport width, group bounds, or gap
    /// is out of range.
    pub fn calculate_seeded(
        &self,
        items: &[ImageItem],
        viewport_width: f32,
        seed: u64,
    ) -> Result<Layout, LayoutError> {
        self.calculate_with_rng(items, viewport_width, &mut StdRng::seed_from_u64(seed))
    }

    /// Compute a mosaic layout drawing randomness from the given generator.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the viewport width, group bounds, or gap
    /// is out of range. An empty item slice is not an error: it produces an
    /// empty layout with zero height.
    pub fn calculate_with_rng<R: Rng>(
        &self,
        items: &[ImageItem],
        viewport_width: f32,
        rng: &mut R,
    ) -> Result<Layout, LayoutError> {
        self.validate(viewport_width)?;

        let mut layout = Layout::new();
        if items.is_empty() {
            return Ok(layout);
        }

        let groups = grouper::build_groups(items, self.min_per_group, self.max_per_group, rng);
        debug!(
            item_count = items.len(),
            group_count = groups.len();
            "Cut gallery into mosaic groups"
        );

        let mut y = 0.0_f32;
        for group in &groups {
            let components = grouper::build_components(group, rng);
            let group_height =
                compositor::layout_group(&components, viewport_width, self.gap, y, &mut layout);

            // A degenerate group is skipped without advancing the offset.
            if group_height > 0.0 {
                y += group_height + self.gap;
            }
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
mod tests {
    use tessera_core::item::{ImageSource, validate_sources};

    use super::*;

    fn items_from_ratios(ratios: &[f32]) -> Vec<ImageItem> {
        let sources: Vec<ImageSource> = ratios
            .iter()
            .map(|&ratio| ImageSource::new(ratio * 1000.0, 1000.0))
            .collect();
        let (items, skipped) = validate_sources(&sources);
        assert!(skipped.is_empty());
        items
    }

    fn engine(min_per_group: usize, max_per_group: usize, gap: f32) -> Engine {
        let mut engine = Engine::new();
        engine
            .set_min_per_group(min_per_group)
            .set_max_per_group(max_per_group)
            .set_gap(gap);
        engine
    }

    #[test]
    fn test_rejects_non_positive_viewport() {
        let items = items_from_ratios(&[1.0, 1.5]);
        let result = engine(2, 5, 4.0).calculate_seeded(&items, -100.0, 1);
        assert_eq!(result, Err(LayoutError::InvalidViewport(-100.0)));
    }

    #[test]
    fn test_rejects_inverted_group_bounds() {
        let items = items_from_ratios(&[1.0, 1.5]);
        let result = engine(6, 2, 4.0).calculate_seeded(&items, 1200.0, 1);
        assert_eq!(
            result,
            Err(LayoutError::InvalidGroupBounds { min: 6, max: 2 })
        );
    }

    #[test]
    fn test_rejects_zero_min_per_group() {
        let items = items_from_ratios(&[1.0]);
        let result = engine(0, 4, 4.0).calculate_seeded(&items, 1200.0, 1);
        assert_eq!(
            result,
            Err(LayoutError::InvalidGroupBounds { min: 0, max: 4 })
        );
    }

    #[test]
    fn test_empty_input_yields_empty_layout() {
        let layout = engine(2, 5, 4.0)
            .calculate_seeded(&[], 1200.0, 1)
            .expect("empty input is not an error");
        assert!(layout.is_empty());
        assert_eq!(layout.total_height(), 0.0);
    }

    #[test]
    fn test_every_image_gets_exactly_one_tile() {
        let ratios = [1.0, 0.5, 2.0, 1.5, 0.8, 1.2, 0.9, 1.1, 2.5, 0.6, 1.7];
        let items = items_from_ratios(&ratios);
        let layout = engine(2, 5, 4.0)
            .calculate_seeded(&items, 1200.0, 17)
            .expect("mosaic layout");

        assert_eq!(layout.len(), ratios.len());
        let indices: Vec<usize> = layout.tiles().keys().copied().collect();
        assert_eq!(indices, (0..ratios.len()).collect::<Vec<usize>>());
    }

    #[test]
    fn test_tiles_stay_inside_viewport_and_total_height() {
        let ratios = [1.0, 0.5, 2.0, 1.5, 0.8, 1.2, 0.9, 1.1, 2.5, 0.6];
        let items = items_from_ratios(&ratios);
        let viewport = 1080.0;
        let layout = engine(2, 4, 4.0)
            .calculate_seeded(&items, viewport, 23)
            .expect("mosaic layout");

        for tile in layout.tiles().values() {
            assert!(tile.x() >= -0.5);
            assert!(tile.y() >= -0.5);
            assert!(tile.right() <= viewport + 1.0, "tile overflows viewport");
            assert!(
                tile.bottom() <= layout.total_height() + 1.0,
                "tile overflows total height"
            );
        }
    }

    #[test]
    fn test_each_group_reaches_the_right_edge() {
        let ratios = [1.0, 0.5, 2.0, 1.5, 0.8, 1.2, 0.9, 1.1];
        let items = items_from_ratios(&ratios);
        let viewport = 900.0;
        let layout = engine(2, 4, 0.0)
            .calculate_seeded(&items, viewport, 31)
            .expect("mosaic layout");

        // With zero gap, the rightmost edge of the whole layout must land on
        // the viewport edge, and so must every group's widest extent.
        let max_right = layout
            .tiles()
            .values()
            .map(|tile| tile.right())
            .fold(0.0_f32, f32::max);
        assert!((max_right - viewport).abs() <= 1.0);
    }

    #[test]
    fn test_identical_seeds_produce_identical_layouts() {
        let ratios = [1.0, 0.5, 2.0, 1.5, 0.8, 1.2, 0.9, 1.1, 2.5];
        let items = items_from_ratios(&ratios);
        let engine = engine(2, 5, 4.0);

        let first = engine
            .calculate_seeded(&items, 1200.0, 42)
            .expect("first run");
        let second = engine
            .calculate_seeded(&items, 1200.0, 42)
            .expect("second run");

        assert_eq!(first, second);
    }

    #[test]
    fn test_single_image_gallery() {
        let items = items_from_ratios(&[1.6]);
        let layout = engine(2, 5, 4.0)
            .calculate_seeded(&items, 800.0, 3)
            .expect("single image mosaic");

        let tile = layout.tile(0).expect("tile for the only image");
        assert!((tile.width() - 800.0).abs() <= 0.5);
        assert!((tile.height() - 500.0).abs() <= 0.5);
        assert!((layout.total_height() - 500.0).abs() <= 0.5);
    }
}
