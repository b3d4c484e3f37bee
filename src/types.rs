//! Core types for the gridboard layout system.
//!
//! This module defines the fundamental data structures shared across the
//! interaction code: block identifiers, registry entries, and the cursor
//! affordance tokens published to the render layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for one block, unique within a registry.
///
/// Composed as `<type_tag><sequence>` at creation time and never reused
/// within the registry's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Compose an id from a type tag and a per-registry sequence number.
    pub fn compose(type_tag: &str, sequence: u64) -> Self {
        Self(format!("{type_tag}{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Registry value for one live block: its pixel offset and pixel size.
///
/// Serializes to `{ "offset": [x, y], "size": [w, h] }`, the shape external
/// tools consume through [`crate::registry::LayoutRegistry::snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlockEntry {
    /// Position on the canvas in pixels (x, y)
    pub offset: (f32, f32),
    /// Visual size in pixels (width, height)
    pub size: (f32, f32),
}

impl BlockEntry {
    pub fn new(offset: (f32, f32), size: (f32, f32)) -> Self {
        Self { offset, size }
    }
}

/// Advisory cursor affordance published while the pointer hovers a block.
///
/// The render layer owns the actual cursor; these tokens are hints only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorHint {
    /// Vertical resize (north/south edge)
    NsResize,
    /// Horizontal resize (east/west edge)
    EwResize,
    /// Diagonal resize (north-west/south-east corner)
    NwseResize,
    /// Diagonal resize (north-east/south-west corner)
    NeswResize,
    /// Block interior, ready to grab
    Grab,
    /// Move drag in progress
    Grabbing,
}

impl CursorHint {
    /// The wire token for this hint, from the fixed affordance set.
    pub fn token(self) -> &'static str {
        match self {
            CursorHint::NsResize => "ns-resize",
            CursorHint::EwResize => "ew-resize",
            CursorHint::NwseResize => "nwse-resize",
            CursorHint::NeswResize => "nesw-resize",
            CursorHint::Grab => "grab",
            CursorHint::Grabbing => "grabbing",
        }
    }
}
