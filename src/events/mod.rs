//! Animation event queue: snapshot diffing for the external renderer.
//!
//! ## Key Types
//!
//! - `AnimationEvent` / `EventType`: timed presentation descriptors
//! - `build_animation_queue`: pure, idempotent diff of two snapshots
//!
//! The renderer/audio layer maps event types to concrete visuals and
//! sounds; the engine only decides what happened and when.

pub mod builder;
pub mod event;

pub use builder::{
    build_animation_queue, ABILITY_STEP_MS, COMBO_OFFSET_MS, REVEAL_STEP_MS,
};
pub use event::{AnimationEvent, EventType};
