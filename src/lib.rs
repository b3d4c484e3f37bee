//! gridboard - interaction core for a grid-snapped layout editor.
//!
//! Users place rectangular blocks on a canvas, drag them to reposition,
//! and drag their edges to resize; all geometry lives on a fixed grid.
//! This crate is the headless core of that editor: the per-block
//! interaction state machine, edge classification, the shared geometry
//! registry, and block collection management. Rendering and the raw
//! pointer-drag primitive stay in the embedding application, behind the
//! boundaries defined in [`drag`] and [`events`].
//!
//! ## Modules
//!
//! - [`edge`] - pure pointer-position-to-compass-edge classification
//! - [`input`] - the per-block interaction state machine and controller
//! - [`registry`] - the shared `id -> {offset, size}` geometry registry
//! - [`collection`] - block creation, removal, and the selection invariant
//! - [`block_index`] - R-tree hit testing over registry snapshots
//! - [`events`] - publish/subscribe application events
//! - [`drag`] - the drag-primitive boundary
//! - [`options`] - grid geometry and interaction configuration

pub mod block_index;
pub mod collection;
pub mod constants;
pub mod drag;
pub mod edge;
pub mod error;
pub mod events;
pub mod input;
pub mod options;
pub mod perf;
pub mod registry;
pub mod types;

pub use block_index::BlockIndex;
pub use collection::LayoutCollectionController;
pub use drag::{DragConfig, DragEngine, DragEvent, GateEngine};
pub use edge::{Edge, EdgeConfig, classify};
pub use error::{GeometryError, OptionsError};
pub use events::{EditorEvent, EventBus, Subscription};
pub use input::{BlockInteractionController, InteractionMode};
pub use options::LayoutOptions;
pub use registry::LayoutRegistry;
pub use types::{BlockEntry, BlockId, CursorHint};
