//! Grid and interaction defaults.
//!
//! Centralizes magic numbers so the interaction code stays free of
//! unexplained literals.

// ============================================================================
// Grid Geometry
// ============================================================================

/// Side length of one grid cell in pixels
pub const DEFAULT_CELL_SIZE: f32 = 100.0;

/// Snap increments handed to the drag primitive (x, y)
pub const DEFAULT_SNAP: (f32, f32) = (100.0, 100.0);

/// Logical size of a freshly created block, in grid cells
pub const DEFAULT_DIMENSION: (i32, i32) = (1, 1);

// ============================================================================
// Edge Detection
// ============================================================================

/// Distance from a block boundary, in pixels, within which the pointer
/// counts as hovering that edge
pub const EDGE_DETECT_SIZE: f32 = 20.0;

// ============================================================================
// Identifiers
// ============================================================================

/// Prefix for generated block ids (`block1`, `block2`, ...)
pub const DEFAULT_TYPE_TAG: &str = "block";
