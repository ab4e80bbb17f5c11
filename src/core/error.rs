//! Error types.
//!
//! Two distinct families:
//!
//! - `ConfigError`: load-time configuration defects (a combo referencing a
//!   card name no alias or catalog entry resolves). These never occur
//!   mid-match; they're caught by a validation pass before play starts.
//! - `BattleError`: in-match usage errors (committing a play in the wrong
//!   phase, overfilling a lane, malformed card data at the boundary).
//!
//! An unknown card name in ability lookup is *not* an error - it's a common,
//! valid case that yields "no ability".

use thiserror::Error;

use crate::battle::Phase;
use crate::combos::ComboId;

/// Load-time configuration defect.
///
/// Raised by the validation pass that cross-references combo definitions
/// against the ability registry's alias table and card catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A combo requires a card name that resolves to nothing.
    #[error("combo {combo} requires card '{name}' with no matching alias or catalog entry")]
    UnknownComboCard { combo: ComboId, name: String },

    /// A combo's quota exceeds its required-name list.
    #[error("combo {combo} needs {quota} cards but only lists {required}")]
    QuotaExceedsRequirements {
        combo: ComboId,
        quota: usize,
        required: usize,
    },

    /// Two combo definitions share an id.
    #[error("duplicate combo id {0}")]
    DuplicateComboId(ComboId),
}

/// In-match usage error.
///
/// These are rejected synchronously with no partial state mutation -
/// they signal a caller bug, not a game outcome.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BattleError {
    /// A play was committed outside the card-selection phase,
    /// or a phase transition was requested out of order.
    #[error("operation not allowed during {phase} phase")]
    PhaseViolation { phase: Phase },

    /// A play was committed to a lane side already at capacity.
    #[error("lane {lane} is full ({capacity} cards)")]
    LaneFull { lane: usize, capacity: usize },

    /// A play referenced a lane index outside the configured lane count.
    #[error("lane {lane} does not exist (match has {lanes} lanes)")]
    UnknownLane { lane: usize, lanes: usize },

    /// A card payload failed boundary validation before reaching the core.
    #[error("invalid card data: {0}")]
    InvalidCardData(String),
}
