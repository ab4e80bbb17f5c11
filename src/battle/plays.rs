//! Per-turn card plays.
//!
//! A `TurnPlays` collects every card committed by both sides for one turn.
//! A play may carry an explicit wildcard-to-combo assignment, which the
//! combo tie-break honors over definition order.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::combos::ComboId;
use crate::core::Side;

/// One committed card play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPlay {
    /// Which side played the card.
    pub side: Side,

    /// Target lane index.
    pub lane: usize,

    /// The card being played.
    pub card: Card,

    /// Optional explicit combo choice for a wildcard card.
    pub combo_choice: Option<ComboId>,
}

impl CardPlay {
    /// Create a play with no combo choice.
    #[must_use]
    pub fn new(side: Side, lane: usize, card: Card) -> Self {
        Self {
            side,
            lane,
            card,
            combo_choice: None,
        }
    }

    /// Attach an explicit wildcard-to-combo assignment (builder pattern).
    #[must_use]
    pub fn with_combo_choice(mut self, combo: ComboId) -> Self {
        self.combo_choice = Some(combo);
        self
    }
}

/// All plays committed for one turn, in commit order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPlays {
    plays: Vec<CardPlay>,
}

impl TurnPlays {
    /// Create an empty play set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a play.
    pub fn add(&mut self, play: CardPlay) {
        self.plays.push(play);
    }

    /// Add a play (builder pattern).
    #[must_use]
    pub fn with_play(mut self, play: CardPlay) -> Self {
        self.add(play);
        self
    }

    /// All plays in commit order.
    #[must_use]
    pub fn plays(&self) -> &[CardPlay] {
        &self.plays
    }

    /// Whether a side has committed a play to a lane.
    #[must_use]
    pub fn has_play(&self, side: Side, lane: usize) -> bool {
        self.plays
            .iter()
            .any(|p| p.side == side && p.lane == lane)
    }

    /// The explicit combo choice for one side of one lane, if any play
    /// there carries one.
    #[must_use]
    pub fn combo_choice(&self, side: Side, lane: usize) -> Option<ComboId> {
        self.plays
            .iter()
            .filter(|p| p.side == side && p.lane == lane)
            .find_map(|p| p.combo_choice)
    }

    /// Number of committed plays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    /// Whether no plays are committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }
}
