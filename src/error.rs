//! Error types for geometry and configuration operations.
//!
//! The error taxonomy is deliberately narrow: interactive failures degrade
//! to "nothing happens" and are only logged, never surfaced. The types here
//! exist so the validation sites and the options loader have something
//! precise to report internally.

use crate::types::BlockId;
use thiserror::Error;

/// Reasons an interaction is rejected.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// A proposed resize would produce a non-positive pixel size.
    #[error("resize to non-positive size rejected: {width}x{height}")]
    InvalidGeometry { width: f32, height: f32 },

    /// A registry operation referenced an id with no live entry.
    #[error("unknown block id: {0}")]
    UnknownBlock(BlockId),

    /// A drag or resize gesture arrived before the block was activated.
    #[error("interaction before activation")]
    Unarmed,
}

/// Errors from loading or validating [`crate::options::LayoutOptions`].
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid option value: {0}")]
    InvalidValue(String),
}
