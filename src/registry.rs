//! Shared geometry registry.
//!
//! One [`LayoutRegistry`] maps block ids to their live `{offset, size}`
//! entries. Every block controller writes through the same shared instance
//! (injected at construction, never copied), so a controller's mutation is
//! immediately visible to the other controllers and to external readers
//! like export or hit testing.
//!
//! Within a single event loop mutation is already serialized; the interior
//! `RwLock` preserves that serialization when the embedding application
//! runs real threads.

use crate::error::GeometryError;
use crate::types::{BlockEntry, BlockId};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Shared handle onto a registry. Cloning yields another handle onto the
/// same underlying map.
#[derive(Clone, Default)]
pub struct LayoutRegistry {
    inner: Arc<RwLock<HashMap<BlockId, BlockEntry>>>,
}

impl LayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `id`.
    pub fn put(&self, id: BlockId, entry: BlockEntry) {
        self.inner.write().insert(id, entry);
    }

    /// Current entry for `id`, if the block is live.
    pub fn get(&self, id: &BlockId) -> Option<BlockEntry> {
        self.inner.read().get(id).copied()
    }

    /// Like [`get`](Self::get), but reports the miss as an error for
    /// callers that need to log it.
    pub fn require(&self, id: &BlockId) -> Result<BlockEntry, GeometryError> {
        self.get(id)
            .ok_or_else(|| GeometryError::UnknownBlock(id.clone()))
    }

    /// Overwrite the offset of a live entry. Unknown ids are a no-op: the
    /// block may have been destroyed while the write was in flight.
    pub fn set_offset(&self, id: &BlockId, offset: (f32, f32)) {
        match self.inner.write().get_mut(id) {
            Some(entry) => entry.offset = offset,
            None => debug!(block = %id, "offset write for unknown block dropped"),
        }
    }

    /// Overwrite the size of a live entry. Unknown ids are a no-op.
    pub fn set_size(&self, id: &BlockId, size: (f32, f32)) {
        match self.inner.write().get_mut(id) {
            Some(entry) => entry.size = size,
            None => debug!(block = %id, "size write for unknown block dropped"),
        }
    }

    /// Remove the entry for `id`, returning it if it was live. Removing an
    /// unknown id is a no-op.
    pub fn remove(&self, id: &BlockId) -> Option<BlockEntry> {
        self.inner.write().remove(id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.inner.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Ordered copy of the whole registry: the read contract for external
    /// tools. Serializes to `{ "<id>": { "offset": [x, y], "size": [w, h] } }`.
    pub fn snapshot(&self) -> BTreeMap<BlockId, BlockEntry> {
        self.inner
            .read()
            .iter()
            .map(|(id, entry)| (id.clone(), *entry))
            .collect()
    }
}
