//! Per-block interaction controller.
//!
//! Owns one block's geometry and interaction state, wires pointer and drag
//! signals to state transitions, and mirrors every geometry change into the
//! shared registry entry for its id.
//!
//! ## Performance Notes
//!
//! Pointer moves arrive very frequently during interaction (potentially
//! 60+ times per second). The hot paths exit early for active drags and do
//! no allocation unless the edge classification actually changes.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use crate::drag::{DragEngine, DragEvent};
use crate::edge::{self, Edge};
use crate::error::GeometryError;
use crate::events::{EditorEvent, EventBus};
use crate::input::InteractionMode;
use crate::options::LayoutOptions;
use crate::profile_scope;
use crate::registry::LayoutRegistry;
use crate::types::{BlockEntry, BlockId, CursorHint};
use tracing::{debug, trace};

/// Interaction state machine for one block.
pub struct BlockInteractionController {
    id: BlockId,
    registry: LayoutRegistry,
    bus: EventBus,
    options: LayoutOptions,
    engine: Box<dyn DragEngine>,

    mode: InteractionMode,
    edge: Option<Edge>,
    last_hint: Option<CursorHint>,
    draggable: bool,
    armed: bool,

    offset: (f32, f32),
    dimension: (i32, i32),
    size_px: (f32, f32),
}

impl BlockInteractionController {
    /// Construct a controller bound to the shared registry and bus. The
    /// block's registry entry is inserted here, atomically with the
    /// controller itself, so no reader ever observes the id without an
    /// entry.
    pub fn new(
        id: BlockId,
        registry: LayoutRegistry,
        bus: EventBus,
        options: LayoutOptions,
        engine: Box<dyn DragEngine>,
    ) -> Self {
        let offset = (0.0, 0.0);
        let dimension = options.default_dimension;
        let size_px = options.size_for(dimension);
        registry.put(id.clone(), BlockEntry::new(offset, size_px));

        Self {
            id,
            registry,
            bus,
            options,
            engine,
            mode: InteractionMode::Idle,
            edge: None,
            last_hint: None,
            draggable: false,
            armed: false,
            offset,
            dimension,
            size_px,
        }
    }

    /// Pointer moved within the block at local offset (x, y).
    ///
    /// While no drag is active this reclassifies the hovered edge, updates
    /// the draggable flag, and publishes the advisory cursor hint when the
    /// classification changes. Never mutates geometry.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        profile_scope!("pointer_move");

        if self.mode.is_dragging() {
            return;
        }

        let edge = edge::classify(
            (x, y),
            self.dimension,
            self.options.cell_size,
            self.options.edge_threshold,
            &self.options.edges,
        );
        self.draggable = edge.is_none();
        self.edge = edge;

        self.publish_hint(match edge {
            Some(edge) => edge.cursor(),
            None => CursorHint::Grab,
        });
    }

    /// Primary-activation gesture (e.g. a click on the block): arms this
    /// controller and the drag engine's gate. Until then every drag or
    /// resize gesture is ignored, which keeps a freshly created block from
    /// being dragged by the same gesture that created it.
    pub fn activate(&mut self) {
        self.armed = true;
        self.engine.activate();
        debug!(block = %self.id, "activated");
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Dispatch one drag-primitive event.
    pub fn handle_drag(&mut self, event: DragEvent) {
        match event {
            DragEvent::Start => self.on_drag_start(),
            DragEvent::Update(delta) => self.on_drag_update(delta),
            DragEvent::End => self.on_drag_end(),
        }
    }

    /// Drag gesture began.
    pub fn on_drag_start(&mut self) {
        self.grab();
    }

    /// Drag gesture progressed by one delta: raw (pre-snapped) pixels in
    /// move mode, whole grid-cell increments in resize mode.
    pub fn on_drag_update(&mut self, delta: (f32, f32)) {
        profile_scope!("drag_update");

        // The primitive delivers update without start when the gesture
        // began outside our window; treat the first update as the grab.
        if !self.mode.is_dragging() {
            self.grab();
        }

        match self.mode {
            InteractionMode::DraggingMove => self.apply_move(delta),
            InteractionMode::DraggingResize => self.apply_resize(delta),
            _ => {}
        }
    }

    /// Drag gesture ended: back to idle. The grabbing affordance reverts
    /// unless the pointer is parked on a resize edge.
    pub fn on_drag_end(&mut self) {
        if self.mode.is_idle() {
            return;
        }
        self.mode.reset();
        self.engine.end_dragging();
        if self.draggable {
            self.publish_hint(CursorHint::Grab);
        }
        debug!(block = %self.id, "drag ended");
    }

    /// Secondary-activation gesture (e.g. double-click): expose this
    /// block's live registry entry for diagnostics. Read-only.
    pub fn inspect(&self) -> Option<BlockEntry> {
        self.registry.get(&self.id)
    }

    fn grab(&mut self) {
        if !self.armed {
            debug!(block = %self.id, reason = %GeometryError::Unarmed, "gesture ignored");
            return;
        }

        self.mode.grab();
        if let Some(edge) = self.edge {
            // Edge-initiated resize enters the engine through its explicit
            // entry point, independent of the activation gate.
            self.engine.start_dragging();
            self.mode.start_resize();
            debug!(block = %self.id, edge = edge.code(), "resize drag started");
        } else if self.draggable {
            self.mode.start_move();
            self.publish_hint(CursorHint::Grabbing);
            debug!(block = %self.id, "move drag started");
        }
    }

    /// Publish the advisory cursor affordance, deduplicating repeats so a
    /// stream of pointer moves over the same region stays quiet.
    fn publish_hint(&mut self, cursor: CursorHint) {
        if self.last_hint == Some(cursor) {
            return;
        }
        self.last_hint = Some(cursor);
        self.bus.publish(&EditorEvent::CursorHint {
            block: self.id.clone(),
            cursor,
        });
    }

    fn apply_move(&mut self, delta: (f32, f32)) {
        // Translation accumulates the raw delta; quantization is the drag
        // primitive's job.
        self.offset.0 += delta.0;
        self.offset.1 += delta.1;
        trace!(block = %self.id, x = self.offset.0, y = self.offset.1, "translating");
        self.registry.set_offset(&self.id, self.offset);
    }

    fn apply_resize(&mut self, delta: (f32, f32)) {
        match self.validated_resize(delta) {
            Ok((dimension, size_px)) => {
                self.dimension = dimension;
                self.size_px = size_px;
                trace!(
                    block = %self.id,
                    cols = dimension.0,
                    rows = dimension.1,
                    "resizing"
                );
                self.registry.set_size(&self.id, size_px);
            }
            Err(reason) => debug!(block = %self.id, %reason, "resize rejected"),
        }
    }

    /// Check a resize delta against the current size. Rejects any update
    /// whose resulting pixel size would be non-positive in either axis, so
    /// the block can never shrink below one grid cell.
    fn validated_resize(
        &self,
        delta: (f32, f32),
    ) -> Result<((i32, i32), (f32, f32)), GeometryError> {
        let cell = self.options.cell_size;
        let width = self.size_px.0 + delta.0 * cell;
        let height = self.size_px.1 + delta.1 * cell;
        if width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::InvalidGeometry { width, height });
        }
        let dimension = (
            self.dimension.0 + delta.0.round() as i32,
            self.dimension.1 + delta.1.round() as i32,
        );
        Ok((dimension, (width, height)))
    }

    // ==================== Accessors ====================

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    /// Pixel position on the canvas. Mutated only in move mode.
    pub fn offset(&self) -> (f32, f32) {
        self.offset
    }

    /// Authoritative logical size in grid cells.
    pub fn dimension(&self) -> (i32, i32) {
        self.dimension
    }

    /// The visual-size channel: what the render layer should display. May
    /// transiently diverge from `dimension * cell_size` mid-resize.
    pub fn size_px(&self) -> (f32, f32) {
        self.size_px
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Last edge classification, recomputed on every non-dragging pointer
    /// move. Transient; not persisted anywhere.
    pub fn edge(&self) -> Option<Edge> {
        self.edge
    }

    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    pub fn engine(&self) -> &dyn DragEngine {
        self.engine.as_ref()
    }
}
