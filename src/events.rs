//! Application event broadcast.
//!
//! Replaces implicit event-pipe fan-out with an explicit publish/subscribe
//! bus: components publish named events with typed payloads, listeners
//! subscribe and unsubscribe independently, and wiring is visible at the
//! call sites instead of buried in piping chains.
//!
//! The bus is synchronous: `publish` invokes every live listener before it
//! returns, in subscription order. Listener sets are snapshotted per
//! publish, so a listener may itself publish without deadlocking.

use crate::types::{BlockId, CursorHint};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Events crossing the core's boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorEvent {
    /// A block became the selected one.
    Select(BlockId),
    /// Selection cleared.
    Deselect,
    /// A block asks the collection to deselect everyone else.
    DeselectRest,
    /// Request to create a new block.
    CreateBlock,
    /// Re-arm the keyboard creation shortcut.
    AllowCreation,
    /// Advisory cursor affordance for one block.
    CursorHint { block: BlockId, cursor: CursorHint },
}

type Listener = Arc<dyn Fn(&EditorEvent) + Send + Sync>;

struct BusInner {
    listeners: RwLock<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

/// Shared publish/subscribe handle. Cloning yields another handle onto the
/// same bus.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<BusInner>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                listeners: RwLock::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Register a listener. The listener stays live until the returned
    /// [`Subscription`] is dropped (or detached).
    pub fn subscribe(&self, listener: impl Fn(&EditorEvent) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.write().push((id, Arc::new(listener)));
        Subscription {
            id,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver an event to every live listener, synchronously and in
    /// subscription order.
    pub fn publish(&self, event: &EditorEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .read()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.read().len()
    }
}

/// Handle tying a listener's lifetime to a scope. Dropping it removes the
/// listener from the bus.
#[must_use = "dropping a Subscription immediately unsubscribes its listener"]
pub struct Subscription {
    id: u64,
    bus: Weak<BusInner>,
}

impl Subscription {
    /// Keep the listener registered for the lifetime of the bus.
    pub fn detach(mut self) {
        self.bus = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.listeners.write().retain(|(id, _)| *id != self.id);
        }
    }
}
