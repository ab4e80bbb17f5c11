//! Match configuration.
//!
//! A match is shaped by a handful of constants: lane count, per-side lane
//! capacity, the score needed to win, and the turn limit. Defaults mirror
//! the standard three-lane game; everything is overridable for tests and
//! alternate formats.

use serde::{Deserialize, Serialize};

/// Configuration for a single match.
///
/// ## Example
///
/// ```
/// use laneclash::core::MatchConfig;
///
/// let config = MatchConfig::default().with_lanes(5).with_win_threshold(4);
/// assert_eq!(config.lanes, 5);
/// assert_eq!(config.win_threshold, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of parallel battle lanes.
    pub lanes: usize,

    /// Maximum cards one side may hold in one lane.
    pub max_cards_per_lane: usize,

    /// Score at which a side wins immediately.
    pub win_threshold: u32,

    /// Maximum number of turns before the match ends.
    pub turn_limit: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            lanes: 3,
            max_cards_per_lane: 4,
            win_threshold: 3,
            turn_limit: 6,
        }
    }
}

impl MatchConfig {
    /// Set the lane count.
    #[must_use]
    pub fn with_lanes(mut self, lanes: usize) -> Self {
        self.lanes = lanes;
        self
    }

    /// Set the per-side lane capacity.
    #[must_use]
    pub fn with_max_cards_per_lane(mut self, max: usize) -> Self {
        self.max_cards_per_lane = max;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = limit;
        self
    }
}
