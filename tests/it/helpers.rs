//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestCanvasBuilder` - Builder pattern for creating collections with
//!   blocks and tuned options
//! - `EventCollector` - captures every event a bus publishes
//! - Pointer gesture shorthands

use gridboard::collection::LayoutCollectionController;
use gridboard::events::{EditorEvent, EventBus, Subscription};
use gridboard::input::BlockInteractionController;
use gridboard::options::LayoutOptions;
use gridboard::types::BlockId;
use parking_lot::Mutex;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// Install a tracing subscriber once for the whole test binary. Controlled
/// by `RUST_LOG` as usual.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// TestCanvasBuilder - Builder pattern for creating test collections
// ============================================================================

/// Builder for a collection with pre-created blocks.
///
/// # Example
/// ```ignore
/// let (mut collection, bus) = TestCanvasBuilder::new()
///     .with_n_blocks(3)
///     .with_cell_size(50.0)
///     .build();
/// ```
pub struct TestCanvasBuilder {
    options: LayoutOptions,
    blocks: usize,
}

impl Default for TestCanvasBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCanvasBuilder {
    pub fn new() -> Self {
        Self {
            options: LayoutOptions::default(),
            blocks: 0,
        }
    }

    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.options.cell_size = cell_size;
        self
    }

    pub fn with_edge_threshold(mut self, threshold: f32) -> Self {
        self.options.edge_threshold = threshold;
        self
    }

    pub fn with_type_tag(mut self, tag: &str) -> Self {
        self.options.type_tag = tag.to_string();
        self
    }

    /// Arm the north/west edge family too.
    pub fn with_full_compass(mut self) -> Self {
        self.options.edges.detect_north_west = true;
        self
    }

    pub fn with_n_blocks(mut self, count: usize) -> Self {
        self.blocks = count;
        self
    }

    pub fn build(self) -> (LayoutCollectionController, EventBus) {
        init_tracing();
        let bus = EventBus::new();
        let mut collection = LayoutCollectionController::new(self.options, bus.clone());
        for _ in 0..self.blocks {
            collection.create_block();
        }
        (collection, bus)
    }
}

/// Collection with one block, plus that block's id.
pub fn single_block_canvas() -> (LayoutCollectionController, EventBus, BlockId) {
    let (mut collection, bus) = TestCanvasBuilder::new().build();
    let id = collection.create_block();
    (collection, bus, id)
}

// ============================================================================
// EventCollector
// ============================================================================

/// Captures every event published on a bus, in order.
pub struct EventCollector {
    events: Arc<Mutex<Vec<EditorEvent>>>,
    _subscription: Subscription,
}

impl EventCollector {
    pub fn attach(bus: &EventBus) -> Self {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let subscription = bus.subscribe(move |event| sink.lock().push(event.clone()));
        Self {
            events,
            _subscription: subscription,
        }
    }

    /// Everything captured so far.
    pub fn events(&self) -> Vec<EditorEvent> {
        self.events.lock().clone()
    }

    /// Drain the capture buffer.
    pub fn take(&self) -> Vec<EditorEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

// ============================================================================
// Gesture shorthands
// ============================================================================

/// Park the pointer in the middle of a default one-cell block.
pub fn hover_interior(block: &mut BlockInteractionController) {
    block.on_pointer_move(50.0, 50.0);
}

/// Park the pointer on the south-east corner of a default one-cell block.
pub fn hover_south_east(block: &mut BlockInteractionController) {
    block.on_pointer_move(95.0, 95.0);
}

/// Click the interior and begin a move drag.
pub fn begin_move_drag(block: &mut BlockInteractionController) {
    hover_interior(block);
    block.activate();
    block.on_drag_start();
}

/// Click the south-east corner and begin a resize drag.
pub fn begin_resize_drag(block: &mut BlockInteractionController) {
    hover_south_east(block);
    block.activate();
    block.on_drag_start();
}
