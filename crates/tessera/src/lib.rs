//! Tessera - an adaptive photo-grid layout engine.
//!
//! Given an ordered collection of images with known natural dimensions and a
//! viewport width, Tessera computes pixel-exact tile geometry through one of
//! two strategies: justified rows (deterministic, partition-balanced) or a
//! randomized mosaic (contrasting aspect ratios paired into stacked
//! columns). The engine is pure: no I/O, no retained state, and the only
//! nondeterminism is the mosaic's injectable random source.

pub mod config;
pub mod layout;
pub mod partition;

mod error;

pub use error::LayoutError;

pub use tessera_core::{geometry, item};
pub use tessera_core::layout::Layout;

use log::{debug, warn};
use rand::Rng;

use tessera_core::item::{ImageItem, ImageSource, validate_sources};

use config::GridConfig;

/// Facade for computing gallery layouts.
///
/// Screens the caller-supplied sources, dispatches to the configured
/// strategy engine, and reports any skipped (degenerate) images on the
/// returned [`Layout`].
///
/// # Examples
///
/// ```
/// use tessera::GridBuilder;
/// use tessera::item::ImageSource;
///
/// let sources = vec![
///     ImageSource::new(1600.0, 900.0),
///     ImageSource::new(900.0, 1600.0),
///     ImageSource::new(1200.0, 800.0),
/// ];
///
/// let builder = GridBuilder::default();
///
/// let justified = builder.justified(&sources, 1200.0)
///     .expect("justified layout");
/// assert_eq!(justified.len(), 3);
///
/// // Seeded mosaic: reproducible geometry
/// let mosaic = builder.mosaic_seeded(&sources, 1200.0, 7)
///     .expect("mosaic layout");
/// assert_eq!(mosaic.len(), 3);
/// ```
#[derive(Default)]
pub struct GridBuilder {
    config: GridConfig,
}

impl GridBuilder {
    /// Create a new grid builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Layout configuration for both strategies
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera::{GridBuilder, config::GridConfig};
    ///
    /// let builder = GridBuilder::new(GridConfig::default());
    /// ```
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    /// Compute a justified-row layout for the given sources.
    ///
    /// Degenerate sources (non-positive dimensions) are excluded and
    /// reported via [`Layout::skipped`]; they never fail the call.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the viewport width or the configured
    /// justified parameters are out of range.
    pub fn justified(
        &self,
        sources: &[ImageSource],
        viewport_width: f32,
    ) -> Result<Layout, LayoutError> {
        let (items, skipped) = self.screen(sources);

        let engine = layout::justified::Engine::from_config(self.config.justified());
        let mut layout = engine.calculate(&items, viewport_width)?;
        layout.record_skipped(skipped);

        debug!(
            tile_count = layout.len(),
            total_height = layout.total_height() as f64;
            "Justified layout calculated"
        );
        Ok(layout)
    }

    /// Compute a mosaic layout with an ambient random source.
    ///
    /// Repeated calls draw fresh groupings; use [`GridBuilder::mosaic_seeded`]
    /// for reproducible output.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the viewport width or the configured
    /// mosaic parameters are out of range.
    pub fn mosaic(
        &self,
        sources: &[ImageSource],
        viewport_width: f32,
    ) -> Result<Layout, LayoutError> {
        self.mosaic_with_rng(sources, viewport_width, &mut rand::rng())
    }

    /// Compute a mosaic layout deterministically from a seed.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the viewport width or the configured
    /// mosaic parameters are out of range.
    pub fn mosaic_seeded(
        &self,
        sources: &[ImageSource],
        viewport_width: f32,
        seed: u64,
    ) -> Result<Layout, LayoutError> {
        let (items, skipped) = self.screen(sources);

        let engine = layout::mosaic::Engine::from_config(self.config.mosaic());
        let mut layout = engine.calculate_seeded(&items, viewport_width, seed)?;
        layout.record_skipped(skipped);
        Ok(layout)
    }

    /// Compute a mosaic layout drawing randomness from the given generator.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] when the viewport width or the configured
    /// mosaic parameters are out of range.
    pub fn mosaic_with_rng<R: Rng>(
        &self,
        sources: &[ImageSource],
        viewport_width: f32,
        rng: &mut R,
    ) -> Result<Layout, LayoutError> {
        let (items, skipped) = self.screen(sources);

        let engine = layout::mosaic::Engine::from_config(self.config.mosaic());
        let mut layout = engine.calculate_with_rng(&items, viewport_width, rng)?;
        layout.record_skipped(skipped);
        Ok(layout)
    }

    fn screen(&self, sources: &[ImageSource]) -> (Vec<ImageItem>, Vec<usize>) {
        let (items, skipped) = validate_sources(sources);
        if !skipped.is_empty() {
            warn!(
                skipped_count = skipped.len(),
                skipped_indices:? = skipped;
                "Excluded images with degenerate dimensions from layout"
            );
        }
        (items, skipped)
    }
}
