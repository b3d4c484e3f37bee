//! Block collection management - creation, removal, selection.
//!
//! The collection controller is the single place blocks come from: it owns
//! the id sequence, the shared registry, and the selection invariant.
//! Both creation paths (the keyboard shortcut and the `CreateBlock`
//! request event) funnel through [`create_block`], keeping id assignment
//! centralized and collision-free.
//!
//! [`create_block`]: LayoutCollectionController::create_block

use crate::block_index::BlockIndex;
use crate::drag::{DragConfig, EngineFactory, GateEngine};
use crate::events::{EditorEvent, EventBus};
use crate::input::BlockInteractionController;
use crate::options::LayoutOptions;
use crate::registry::LayoutRegistry;
use crate::types::BlockId;
use std::collections::HashMap;
use tracing::debug;

/// Creates and owns the blocks of one canvas.
pub struct LayoutCollectionController {
    registry: LayoutRegistry,
    bus: EventBus,
    options: LayoutOptions,
    engine_factory: EngineFactory,

    /// Composition order: newest block last
    order: Vec<BlockId>,
    controllers: HashMap<BlockId, BlockInteractionController>,
    sequence: u64,
    selected: Option<BlockId>,
    creation_allowed: bool,
}

impl LayoutCollectionController {
    /// A fresh collection with its own registry. Blocks get gate-only drag
    /// engines until the embedder injects a real factory with
    /// [`with_engine_factory`](Self::with_engine_factory).
    pub fn new(options: LayoutOptions, bus: EventBus) -> Self {
        Self {
            registry: LayoutRegistry::new(),
            bus,
            options,
            engine_factory: Box::new(|config| Box::new(GateEngine::new(config))),
            order: Vec::new(),
            controllers: HashMap::new(),
            sequence: 0,
            selected: None,
            creation_allowed: true,
        }
    }

    /// Replace the drag-engine factory used for every block created from
    /// now on.
    pub fn with_engine_factory(mut self, factory: EngineFactory) -> Self {
        self.engine_factory = factory;
        self
    }

    /// Create a new block: assign the next id, insert its registry entry,
    /// construct its controller, and make it the sole selected block.
    pub fn create_block(&mut self) -> BlockId {
        self.sequence += 1;
        let id = BlockId::compose(&self.options.type_tag, self.sequence);

        let engine = (self.engine_factory)(DragConfig {
            snap: self.options.snap,
        });
        let controller = BlockInteractionController::new(
            id.clone(),
            self.registry.clone(),
            self.bus.clone(),
            self.options.clone(),
            engine,
        );

        self.order.push(id.clone());
        self.controllers.insert(id.clone(), controller);

        // Newest block is always the one selected, and the only one.
        self.bus.publish(&EditorEvent::Deselect);
        self.selected = Some(id.clone());
        self.bus.publish(&EditorEvent::Select(id.clone()));

        debug!(block = %id, total = self.order.len(), "block created");
        id
    }

    /// Destroy a block: drop its controller and delete its registry entry.
    /// Removing an unknown id is a no-op. Visual teardown is the render
    /// layer's concern.
    pub fn remove_block(&mut self, id: &BlockId) -> bool {
        if self.controllers.remove(id).is_none() {
            debug!(block = %id, "remove for unknown block ignored");
            return false;
        }
        self.order.retain(|known| known != id);
        self.registry.remove(id);
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
            self.bus.publish(&EditorEvent::Deselect);
        }
        debug!(block = %id, total = self.order.len(), "block removed");
        true
    }

    /// Make `id` the sole selected block. Unknown ids are ignored.
    pub fn select(&mut self, id: &BlockId) -> bool {
        match self.registry.require(id) {
            Ok(_) => {
                self.bus.publish(&EditorEvent::Deselect);
                self.selected = Some(id.clone());
                self.bus.publish(&EditorEvent::Select(id.clone()));
                true
            }
            Err(reason) => {
                debug!(%reason, "select ignored");
                false
            }
        }
    }

    /// Clear the selection.
    pub fn deselect(&mut self) {
        self.selected = None;
        self.bus.publish(&EditorEvent::Deselect);
    }

    /// Keyboard-shortcut creation path. Only acts while creation is
    /// globally armed.
    pub fn on_create_shortcut(&mut self) -> Option<BlockId> {
        if !self.creation_allowed {
            debug!("creation shortcut while disarmed ignored");
            return None;
        }
        Some(self.create_block())
    }

    /// Pause the keyboard creation path (e.g. while a text field has
    /// focus). The `AllowCreation` event re-arms it.
    pub fn set_creation_allowed(&mut self, allowed: bool) {
        self.creation_allowed = allowed;
    }

    /// Route one inbound application event.
    pub fn handle_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::CreateBlock => {
                self.create_block();
            }
            EditorEvent::AllowCreation => self.creation_allowed = true,
            // One block asking everyone else to stand down becomes a
            // plain deselect broadcast.
            EditorEvent::DeselectRest => self.deselect(),
            EditorEvent::Select(id) => self.selected = Some(id.clone()),
            EditorEvent::Deselect | EditorEvent::CursorHint { .. } => {}
        }
    }

    /// Build a hit-testing index from the current registry state.
    pub fn build_index(&self) -> BlockIndex {
        BlockIndex::from_snapshot(&self.registry.snapshot())
    }

    // ==================== Accessors ====================

    /// The shared registry every block controller writes through.
    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    pub fn block(&self, id: &BlockId) -> Option<&BlockInteractionController> {
        self.controllers.get(id)
    }

    pub fn block_mut(&mut self, id: &BlockId) -> Option<&mut BlockInteractionController> {
        self.controllers.get_mut(id)
    }

    /// Block ids in composition order, newest last.
    pub fn block_ids(&self) -> &[BlockId] {
        &self.order
    }

    pub fn selected(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    pub fn is_creation_allowed(&self) -> bool {
        self.creation_allowed
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
