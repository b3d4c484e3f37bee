//! Boundary with the pointer-drag primitive.
//!
//! The drag primitive itself lives in the embedding application: it owns
//! raw mouse/touch events and turns them into the discrete start/update/end
//! stream a block controller consumes. This module defines that contract —
//! the [`DragEngine`] trait the controller drives, the [`DragEvent`] stream
//! it receives, and a gate-only engine for embedders and tests that have no
//! windowing stack attached.

use serde::{Deserialize, Serialize};

/// Configuration handed to a drag engine at construction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Snap increments (x, y): the engine quantizes raw pointer movement to
    /// these steps before emitting deltas.
    pub snap: (f32, f32),
}

/// One step of a drag gesture, as delivered by the primitive.
///
/// `Update` carries a directional delta: raw (already snapped) pixels while
/// the block is in move mode, whole grid-cell increments in resize mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    Start,
    Update((f32, f32)),
    End,
}

/// The controller-facing surface of the drag primitive.
///
/// `activate` arms the gate: an unactivated engine ignores move gestures.
/// `start_dragging` is the explicit entry point for edge-initiated resize
/// and works independently of the gate.
pub trait DragEngine {
    /// Arm the gate so the engine responds to move drags.
    fn activate(&mut self);

    fn is_active(&self) -> bool;

    /// Enter dragging explicitly, bypassing the activation gate. Used when
    /// a grab lands on a resize edge.
    fn start_dragging(&mut self);

    fn is_dragging(&self) -> bool;

    /// Gesture finished; the engine returns to its armed-but-idle state.
    fn end_dragging(&mut self);
}

/// Factory injected into the collection controller so each new block gets
/// its own engine instance.
pub type EngineFactory = Box<dyn Fn(DragConfig) -> Box<dyn DragEngine>>;

/// Gate-only engine: tracks activation and dragging state but is not
/// attached to any pointer source. The default when the embedding
/// application has not supplied a real primitive; also what tests drive.
pub struct GateEngine {
    config: DragConfig,
    active: bool,
    dragging: bool,
}

impl GateEngine {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            active: false,
            dragging: false,
        }
    }

    pub fn snap(&self) -> (f32, f32) {
        self.config.snap
    }
}

impl DragEngine for GateEngine {
    fn activate(&mut self) {
        self.active = true;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn start_dragging(&mut self) {
        self.dragging = true;
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn end_dragging(&mut self) {
        self.dragging = false;
    }
}
