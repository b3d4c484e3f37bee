//! Spatial index over block geometry.
//!
//! Provides R-tree based spatial indexing for efficient hit testing on the
//! canvas, reducing point queries from O(n) to O(log n). The index is a
//! registry consumer: build it from a [`crate::registry::LayoutRegistry`]
//! snapshot, or maintain it incrementally with `insert`/`remove`/`update`.

use crate::types::{BlockEntry, BlockId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::{BTreeMap, HashMap};

/// A spatial entry representing one block's bounding box.
#[derive(Debug, Clone)]
pub struct SpatialEntry {
    pub block_id: BlockId,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl SpatialEntry {
    pub fn new(block_id: BlockId, offset: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            block_id,
            min_x: offset.0,
            min_y: offset.1,
            max_x: offset.0 + size.0,
            max_y: offset.1 + size.1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.block_id == other.block_id
    }
}

/// Hit-testing index over blocks using an R-tree.
pub struct BlockIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<BlockId, SpatialEntry>,
}

impl BlockIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Build an index from a registry snapshot.
    pub fn from_snapshot(snapshot: &BTreeMap<BlockId, BlockEntry>) -> Self {
        let entries: Vec<SpatialEntry> = snapshot
            .iter()
            .map(|(id, entry)| SpatialEntry::new(id.clone(), entry.offset, entry.size))
            .collect();

        let entries_map: HashMap<BlockId, SpatialEntry> = entries
            .iter()
            .map(|e| (e.block_id.clone(), e.clone()))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
            entries: entries_map,
        }
    }

    pub fn insert(&mut self, block_id: BlockId, offset: (f32, f32), size: (f32, f32)) {
        if let Some(old_entry) = self.entries.remove(&block_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(block_id.clone(), offset, size);
        self.tree.insert(entry.clone());
        self.entries.insert(block_id, entry);
    }

    pub fn remove(&mut self, block_id: &BlockId) -> bool {
        if let Some(entry) = self.entries.remove(block_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, block_id: BlockId, offset: (f32, f32), size: (f32, f32)) {
        self.insert(block_id, offset, size);
    }

    /// All blocks whose bounding box contains the given canvas point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<BlockId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.block_id.clone())
            .collect()
    }

    /// All blocks whose bounding box intersects a rectangular region.
    pub fn query_rect(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Vec<BlockId> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.block_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}

impl Default for BlockIndex {
    fn default() -> Self {
        Self::new()
    }
}
