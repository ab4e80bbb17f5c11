//! Battle system: lanes, snapshots, plays, scheduling, and the match
//! state machine.
//!
//! ## Key Types
//!
//! - `Lane` / `PlacedCard`: per-side ordered card lists with power modifiers
//! - `MatchSnapshot` / `Phase`: immutable state emitted at every transition
//! - `TurnPlays` / `CardPlay`: one turn's committed cards
//! - `schedule`: the deterministic-with-seeded-randomness resolution order
//! - `MatchEngine`: phase transitions and `resolve_turn`

pub mod engine;
pub mod lane;
pub mod plays;
pub mod scheduler;
pub mod snapshot;

pub use engine::MatchEngine;
pub use lane::{Lane, LaneSide, PlacedCard};
pub use plays::{CardPlay, TurnPlays};
pub use scheduler::{schedule, Placement, ResolutionStep};
pub use snapshot::{MatchSnapshot, Phase};
