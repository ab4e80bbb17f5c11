//! Ability system: effect descriptors and the name-resolving registry.
//!
//! ## Key Types
//!
//! - `Ability`: kind + category + effect descriptor (data, not behavior)
//! - `AbilityEffect`: exhaustive enum dispatched by the resolution engine
//! - `AbilityRegistry`: alias resolution and per-card lookup, validated at
//!   load time
//!
//! Lookup is a pure read path: unknown names yield `None`, never an error.

pub mod ability;
pub mod registry;

pub use ability::{Ability, AbilityCategory, AbilityEffect, AbilityKind};
pub use registry::{normalize_name, AbilityRegistry};
