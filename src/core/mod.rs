//! Core engine types: sides, match configuration, RNG, errors.
//!
//! These are the fundamental building blocks shared by every other module.
//! The engine carries no global state - configuration and RNG are owned by
//! the caller and threaded through explicitly.

pub mod config;
pub mod error;
pub mod rng;
pub mod side;

pub use config::MatchConfig;
pub use error::{BattleError, ConfigError};
pub use rng::{BattleRng, BattleRngState};
pub use side::{Side, SideMap};
