//! Configuration types for Tessera layout strategies.
//!
//! This module provides configuration structures that control how galleries
//! are laid out. All types implement [`serde::Deserialize`] for flexible
//! loading from external sources.
//!
//! # Overview
//!
//! - [`GridConfig`] - Top-level configuration combining both strategies.
//! - [`JustifiedConfig`] - Parameters for the justified-row strategy.
//! - [`MosaicConfig`] - Parameters for the mosaic strategy.
//!
//! # Example
//!
//! ```
//! # use tessera::config::GridConfig;
//! // Use default configuration
//! let config = GridConfig::default();
//! assert_eq!(config.justified().gap(), 4.0);
//! assert_eq!(config.mosaic().max_per_group(), 5);
//! ```

use serde::Deserialize;

/// Top-level layout configuration combining both strategy sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridConfig {
    /// Justified-row strategy section.
    #[serde(default)]
    justified: JustifiedConfig,

    /// Mosaic strategy section.
    #[serde(default)]
    mosaic: MosaicConfig,
}

impl GridConfig {
    /// Creates a new [`GridConfig`] with the specified strategy configurations.
    pub fn new(justified: JustifiedConfig, mosaic: MosaicConfig) -> Self {
        Self { justified, mosaic }
    }

    /// Returns the justified-row configuration.
    pub fn justified(&self) -> &JustifiedConfig {
        &self.justified
    }

    /// Returns the mosaic configuration.
    pub fn mosaic(&self) -> &MosaicConfig {
        &self.mosaic
    }
}

/// Parameters for the justified-row strategy.
#[derive(Debug, Clone, Deserialize)]
pub struct JustifiedConfig {
    /// Target row height in pixels; actual rows deviate to fill the width.
    #[serde(default = "JustifiedConfig::default_ideal_height")]
    ideal_height: f32,

    /// Spacing between adjacent tiles in pixels.
    #[serde(default = "JustifiedConfig::default_gap")]
    gap: f32,
}

impl JustifiedConfig {
    fn default_ideal_height() -> f32 {
        240.0
    }

    fn default_gap() -> f32 {
        4.0
    }

    /// Creates a new [`JustifiedConfig`] with the specified parameters.
    pub fn new(ideal_height: f32, gap: f32) -> Self {
        Self { ideal_height, gap }
    }

    /// Returns the target row height in pixels.
    pub fn ideal_height(&self) -> f32 {
        self.ideal_height
    }

    /// Returns the spacing between adjacent tiles in pixels.
    pub fn gap(&self) -> f32 {
        self.gap
    }
}

impl Default for JustifiedConfig {
    fn default() -> Self {
        Self {
            ideal_height: Self::default_ideal_height(),
            gap: Self::default_gap(),
        }
    }
}

/// Parameters for the mosaic strategy.
#[derive(Debug, Clone, Deserialize)]
pub struct MosaicConfig {
    /// Smallest number of images per group.
    #[serde(default = "MosaicConfig::default_min_per_group")]
    min_per_group: usize,

    /// Largest number of images per group.
    #[serde(default = "MosaicConfig::default_max_per_group")]
    max_per_group: usize,

    /// Spacing between adjacent components and groups in pixels.
    #[serde(default = "MosaicConfig::default_gap")]
    gap: f32,
}

impl MosaicConfig {
    fn default_min_per_group() -> usize {
        2
    }

    fn default_max_per_group() -> usize {
        5
    }

    fn default_gap() -> f32 {
        4.0
    }

    /// Creates a new [`MosaicConfig`] with the specified parameters.
    pub fn new(min_per_group: usize, max_per_group: usize, gap: f32) -> Self {
        Self {
            min_per_group,
            max_per_group,
            gap,
        }
    }

    /// Returns the smallest number of images per group.
    pub fn min_per_group(&self) -> usize {
        self.min_per_group
    }

    /// Returns the largest number of images per group.
    pub fn max_per_group(&self) -> usize {
        self.max_per_group
    }

    /// Returns the spacing between adjacent components and groups in pixels.
    pub fn gap(&self) -> f32 {
        self.gap
    }
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            min_per_group: Self::default_min_per_group(),
            max_per_group: Self::default_max_per_group(),
            gap: Self::default_gap(),
        }
    }
}
