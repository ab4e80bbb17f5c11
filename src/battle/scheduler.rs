//! Resolution scheduling.
//!
//! Several abilities read "current board state" (e.g. copy the strongest
//! card on the field), so the order in which simultaneous plays resolve is
//! observable. The ordering rule, reproduced exactly:
//!
//! 1. Lane index ascending - lane 0 fully resolves before lane 1.
//! 2. Within a lane, a single coin flip (one per lane per turn, not per
//!    card) decides which side resolves first for every card of that lane.
//! 3. Within one side of one lane, cards resolve by descending rarity
//!    weight (Mythic first, Unranked last), ties keeping play order.
//!
//! The coin flips come from the injected `BattleRng`, so a fixed seed
//! reproduces an identical resolution order.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{rarity_weight, Rarity};
use crate::core::{BattleRng, Side};

/// A card placed this turn, awaiting resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Lane the card was played into.
    pub lane: usize,
    /// Side that played it.
    pub side: Side,
    /// Index of the card within its lane side.
    pub card_index: usize,
    /// Rarity, for the priority weight.
    pub rarity: Rarity,
}

/// One step of the resolution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStep {
    pub lane: usize,
    pub side: Side,
    pub card_index: usize,
}

/// Order this turn's placements for ability resolution.
///
/// One coin flip is drawn per lane regardless of whether the lane received
/// plays, so the draw count (and therefore every later draw) depends only
/// on the lane count - never on which lanes happened to be used.
pub fn schedule(
    placements: &[Placement],
    lane_count: usize,
    rng: &mut BattleRng,
) -> SmallVec<[ResolutionStep; 8]> {
    let mut steps = SmallVec::new();

    for lane in 0..lane_count {
        let first = if rng.coin_flip() {
            Side::Player
        } else {
            Side::Opponent
        };
        log::debug!("lane {lane}: {first} side resolves first");

        for side in [first, first.opposite()] {
            let mut lane_side: Vec<&Placement> = placements
                .iter()
                .filter(|p| p.lane == lane && p.side == side)
                .collect();
            // Stable: equal-rarity cards keep play order
            lane_side.sort_by_key(|p| std::cmp::Reverse(rarity_weight(p.rarity)));

            for p in lane_side {
                steps.push(ResolutionStep {
                    lane: p.lane,
                    side: p.side,
                    card_index: p.card_index,
                });
            }
        }
    }

    steps
}
