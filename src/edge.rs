//! Edge classification for pointer positions within a block.
//!
//! [`classify`] is a pure function of pointer offset, block dimension, and
//! grid geometry. It decides which compass edge (if any) the pointer is
//! near; that classification drives both the advisory resize cursor and the
//! "draggable as move" flag (a pointer over an edge resizes, a pointer over
//! the interior moves).

use crate::types::CursorHint;
use serde::{Deserialize, Serialize};

/// Compass edge of a block's bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Edge {
    /// Compact edge code, vertical letter before horizontal.
    pub fn code(self) -> &'static str {
        match self {
            Edge::North => "n",
            Edge::South => "s",
            Edge::East => "e",
            Edge::West => "w",
            Edge::NorthEast => "ne",
            Edge::NorthWest => "nw",
            Edge::SouthEast => "se",
            Edge::SouthWest => "sw",
        }
    }

    /// Resize cursor affordance for this edge.
    pub fn cursor(self) -> CursorHint {
        match self {
            Edge::North | Edge::South => CursorHint::NsResize,
            Edge::East | Edge::West => CursorHint::EwResize,
            Edge::NorthWest | Edge::SouthEast => CursorHint::NwseResize,
            Edge::NorthEast | Edge::SouthWest => CursorHint::NeswResize,
        }
    }
}

/// Which edge families the detector arms.
///
/// Only the south/east family is armed by default; the north/west tests are
/// behind a flag so embedders can opt into full-compass resizing without
/// changing interaction semantics for existing layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Also classify the north and west edges (and their corners).
    pub detect_north_west: bool,
}

/// Classify a pointer position within a block's bounding box.
///
/// `pointer` is the local (x, y) offset inside the block, `dimension` the
/// block's (cols, rows) cell counts. All four boundary tests are strict
/// (`< threshold`): a pointer exactly `threshold` pixels from an edge is
/// never classified as that edge. When two opposite boundaries both match
/// on a very small block, south wins over north and east over west.
///
/// Returns `None` for the interior; `draggable` is exactly that case.
pub fn classify(
    pointer: (f32, f32),
    dimension: (i32, i32),
    cell_size: f32,
    threshold: f32,
    config: &EdgeConfig,
) -> Option<Edge> {
    let (x, y) = pointer;
    let width = dimension.0 as f32 * cell_size;
    let height = dimension.1 as f32 * cell_size;

    let north = config.detect_north_west && y < threshold;
    let south = height - y < threshold;
    let west = config.detect_north_west && x < threshold;
    let east = width - x < threshold;

    let vertical = if south {
        Some(Edge::South)
    } else if north {
        Some(Edge::North)
    } else {
        None
    };
    let horizontal = if east {
        Some(Edge::East)
    } else if west {
        Some(Edge::West)
    } else {
        None
    };

    match (vertical, horizontal) {
        (None, None) => None,
        (Some(edge), None) | (None, Some(edge)) => Some(edge),
        (Some(Edge::South), Some(Edge::East)) => Some(Edge::SouthEast),
        (Some(Edge::South), Some(Edge::West)) => Some(Edge::SouthWest),
        (Some(Edge::North), Some(Edge::East)) => Some(Edge::NorthEast),
        (Some(Edge::North), Some(Edge::West)) => Some(Edge::NorthWest),
        _ => None,
    }
}
