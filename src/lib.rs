//! # laneclash
//!
//! A deterministic lane-based card battle resolution engine.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The only randomness is the per-lane first-mover
//!    coin flip, drawn from an injected seedable RNG. A fixed seed and
//!    fixed inputs reproduce byte-identical snapshots and event queues,
//!    for testing, replay, and host/client dispute checking.
//!
//! 2. **Pure at the boundary**: The engine exposes pure queries and a
//!    `resolve_turn` step function. Persistence, matchmaking, rendering,
//!    audio, and payment flows are external collaborators invoked around
//!    this core, never by it.
//!
//! 3. **Data over behavior**: Abilities and combos are static data
//!    validated at load time; effects dispatch through exhaustive enums,
//!    not string tags.
//!
//! ## Modules
//!
//! - `core`: sides, match configuration, RNG, errors
//! - `cards`: card model, energy cost, effective power
//! - `abilities`: effect descriptors and the name-resolving registry
//! - `combos`: combo definitions, detection, bounded memo cache
//! - `battle`: lanes, snapshots, scheduling, the match state machine
//! - `events`: snapshot diffing into a timed animation queue

pub mod abilities;
pub mod battle;
pub mod cards;
pub mod combos;
pub mod core;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    BattleError, BattleRng, BattleRngState, ConfigError, MatchConfig, Side, SideMap,
};

pub use crate::cards::{
    can_afford, effective_power, energy_cost, rarity_weight, Card, CardId, Faction, FoilTier,
    Rarity, Wear,
};

pub use crate::abilities::{
    Ability, AbilityCategory, AbilityEffect, AbilityKind, AbilityRegistry,
};

pub use crate::combos::{
    BonusKind, BonusScope, ComboBonus, ComboDefinition, ComboDetector, ComboId, ComboMatch,
    LruCache,
};

pub use crate::battle::{
    CardPlay, Lane, LaneSide, MatchEngine, MatchSnapshot, Phase, PlacedCard, TurnPlays,
};

pub use crate::events::{build_animation_queue, AnimationEvent, EventType};
