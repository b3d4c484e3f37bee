//! Pointer and drag input handling for blocks.
//!
//! This module implements the per-block interaction logic: edge hovering,
//! move/resize mode switching, and geometry updates.
//!
//! ## Architecture
//!
//! Interaction state lives in an explicit state machine
//! ([`InteractionMode`]) rather than scattered boolean flags, so impossible
//! states are unrepresentable.
//!
//! ## Modules
//!
//! - `state` - Interaction state machine enum and helper methods
//! - `controller` - The per-block controller driving transitions and
//!   registry writes

mod controller;
mod state;

pub use controller::BlockInteractionController;
pub use state::InteractionMode;
