//! Per-collection configuration.
//!
//! One [`LayoutOptions`] value is handed to the collection controller at
//! construction and cloned into every block controller it creates. Options
//! deserialize from JSON so the embedding application can ship them as
//! configuration.

use crate::constants::{
    DEFAULT_CELL_SIZE, DEFAULT_DIMENSION, DEFAULT_SNAP, DEFAULT_TYPE_TAG, EDGE_DETECT_SIZE,
};
use crate::edge::EdgeConfig;
use crate::error::OptionsError;
use serde::{Deserialize, Serialize};

/// Grid geometry and interaction tuning for a block collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Snap increments for the drag primitive (x, y)
    pub snap: (f32, f32),
    /// Side length of one grid cell in pixels
    pub cell_size: f32,
    /// Edge detection threshold in pixels
    pub edge_threshold: f32,
    /// Logical size of a freshly created block, in grid cells
    pub default_dimension: (i32, i32),
    /// Prefix for generated block ids
    pub type_tag: String,
    /// Which edge families arm resize
    pub edges: EdgeConfig,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            snap: DEFAULT_SNAP,
            cell_size: DEFAULT_CELL_SIZE,
            edge_threshold: EDGE_DETECT_SIZE,
            default_dimension: DEFAULT_DIMENSION,
            type_tag: DEFAULT_TYPE_TAG.to_string(),
            edges: EdgeConfig::default(),
        }
    }
}

impl LayoutOptions {
    /// Parse options from a JSON document, falling back to defaults for
    /// absent fields, then validate the result.
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check value ranges. Zero or negative grid geometry would make every
    /// resize rejection misfire, so it is refused up front.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.cell_size <= 0.0 {
            return Err(OptionsError::InvalidValue(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if self.snap.0 <= 0.0 || self.snap.1 <= 0.0 {
            return Err(OptionsError::InvalidValue(format!(
                "snap increments must be positive, got ({}, {})",
                self.snap.0, self.snap.1
            )));
        }
        if self.edge_threshold < 0.0 {
            return Err(OptionsError::InvalidValue(format!(
                "edge_threshold must not be negative, got {}",
                self.edge_threshold
            )));
        }
        if self.default_dimension.0 < 1 || self.default_dimension.1 < 1 {
            return Err(OptionsError::InvalidValue(format!(
                "default_dimension must be at least one cell per axis, got ({}, {})",
                self.default_dimension.0, self.default_dimension.1
            )));
        }
        if self.type_tag.is_empty() {
            return Err(OptionsError::InvalidValue(
                "type_tag must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Pixel size of a block with the given cell dimension.
    pub fn size_for(&self, dimension: (i32, i32)) -> (f32, f32) {
        (
            dimension.0 as f32 * self.cell_size,
            dimension.1 as f32 * self.cell_size,
        )
    }
}
