//! Match snapshots and phases.
//!
//! A snapshot is emitted at every phase transition and is immutable once
//! emitted - downstream consumers (the event builder, persistence, dispute
//! checking) only ever compare snapshots, never mutate them. The engine
//! retains no history; replay storage is an external concern.

use serde::{Deserialize, Serialize};

use super::lane::Lane;
use crate::core::{MatchConfig, Side, SideMap};

/// The match phase cycle.
///
/// `CardSelection → Reveal → Resolution → (loop)`, terminating in
/// `GameOver`. No phase may be skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    CardSelection,
    Reveal,
    Resolution,
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::CardSelection => write!(f, "card-selection"),
            Phase::Reveal => write!(f, "reveal"),
            Phase::Resolution => write!(f, "resolution"),
            Phase::GameOver => write!(f, "game-over"),
        }
    }
}

/// Complete observable match state at one phase transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// The battle lanes, in lane-index order.
    pub lanes: Vec<Lane>,

    /// Accumulated score per side.
    pub scores: SideMap<u32>,

    /// Current phase.
    pub phase: Phase,

    /// Turn number, starting at 1.
    pub turn_number: u32,
}

impl MatchSnapshot {
    /// Initial snapshot for a fresh match.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            lanes: (0..config.lanes).map(|_| Lane::new()).collect(),
            scores: SideMap::with_value(0),
            phase: Phase::CardSelection,
            turn_number: 1,
        }
    }

    /// Total power of one side in one lane. Zero for out-of-range lanes.
    #[must_use]
    pub fn total_power(&self, lane: usize, side: Side) -> i64 {
        self.lanes.get(lane).map_or(0, |l| l.total_power(side))
    }

    /// Lanes won by each side under strict power comparison.
    #[must_use]
    pub fn lane_wins(&self) -> SideMap<u32> {
        let mut wins = SideMap::with_value(0u32);
        for lane in &self.lanes {
            let player = lane.total_power(Side::Player);
            let opponent = lane.total_power(Side::Opponent);
            if player > opponent {
                wins[Side::Player] += 1;
            } else if opponent > player {
                wins[Side::Opponent] += 1;
            }
        }
        wins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::lane::PlacedCard;
    use crate::cards::{Card, CardId, Faction, Rarity};

    #[test]
    fn test_phase_display() {
        assert_eq!(format!("{}", Phase::CardSelection), "card-selection");
        assert_eq!(format!("{}", Phase::GameOver), "game-over");
    }

    #[test]
    fn test_initial_snapshot() {
        let snapshot = MatchSnapshot::new(&MatchConfig::default());

        assert_eq!(snapshot.lanes.len(), 3);
        assert_eq!(snapshot.phase, Phase::CardSelection);
        assert_eq!(snapshot.turn_number, 1);
        assert_eq!(snapshot.scores[Side::Player], 0);
        assert_eq!(snapshot.scores[Side::Opponent], 0);
    }

    #[test]
    fn test_lane_wins() {
        let mut snapshot = MatchSnapshot::new(&MatchConfig::default());
        let strong = Card::new(CardId::new(1), "Strong", Faction::Primary, Rarity::Common, 50);
        let weak = Card::new(CardId::new(2), "Weak", Faction::Primary, Rarity::Common, 20);

        snapshot.lanes[0].sides[Side::Player]
            .cards
            .push_back(PlacedCard::new(strong));
        snapshot.lanes[0].sides[Side::Opponent]
            .cards
            .push_back(PlacedCard::new(weak.clone()));
        // Lane 1 tied at zero, lane 2 opponent only
        snapshot.lanes[2].sides[Side::Opponent]
            .cards
            .push_back(PlacedCard::new(weak));

        let wins = snapshot.lane_wins();
        assert_eq!(wins[Side::Player], 1);
        assert_eq!(wins[Side::Opponent], 1);
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let snapshot = MatchSnapshot::new(&MatchConfig::default());
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
