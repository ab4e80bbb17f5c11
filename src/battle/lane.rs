//! Lanes: the parallel battle tracks cards are played into.
//!
//! A lane holds an ordered card list per side. The `Card` itself is
//! immutable once placed; ability and combo modifiers accumulate in the
//! `power_bonus` that rides alongside it in `PlacedCard`.
//!
//! Lane card lists use `im::Vector` so snapshot clones at every phase
//! transition are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{effective_power, Card};
use crate::core::{Side, SideMap};

/// A card placed in a lane, with its accumulated power modifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCard {
    /// The card as dealt. Immutable.
    pub card: Card,

    /// Net ability/combo modifier applied so far.
    pub power_bonus: i64,
}

impl PlacedCard {
    /// Place a card with no modifiers.
    #[must_use]
    pub fn new(card: Card) -> Self {
        Self {
            card,
            power_bonus: 0,
        }
    }

    /// Current power: effective power plus modifiers, never below zero.
    #[must_use]
    pub fn power(&self) -> i64 {
        (effective_power(&self.card) + self.power_bonus).max(0)
    }
}

/// One side's ordered card list within a lane.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneSide {
    pub cards: Vector<PlacedCard>,
}

impl LaneSide {
    /// Sum of card powers on this side.
    #[must_use]
    pub fn total_power(&self) -> i64 {
        self.cards.iter().map(PlacedCard::power).sum()
    }

    /// Number of cards on this side.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Clone out the bare cards, for combo detection.
    #[must_use]
    pub fn bare_cards(&self) -> Vec<Card> {
        self.cards.iter().map(|p| p.card.clone()).collect()
    }
}

/// One battle lane: a card list per side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub sides: SideMap<LaneSide>,
}

impl Lane {
    /// Create an empty lane.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total power for one side of this lane.
    #[must_use]
    pub fn total_power(&self, side: Side) -> i64 {
        self.sides[side].total_power()
    }

    /// Card count for one side of this lane.
    #[must_use]
    pub fn card_count(&self, side: Side) -> usize {
        self.sides[side].card_count()
    }

    /// Whether a side of this lane is at capacity.
    #[must_use]
    pub fn is_full(&self, side: Side, capacity: usize) -> bool {
        self.card_count(side) >= capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Faction, Rarity};

    fn card(name: &str, faction: Faction, power: u32) -> Card {
        Card::new(CardId::new(1), name, faction, Rarity::Common, power)
    }

    #[test]
    fn test_placed_card_power_uses_effective_power() {
        let placed = PlacedCard::new(card("Penalty Imp", Faction::Penalty, 31));
        assert_eq!(placed.power(), 15);
    }

    #[test]
    fn test_placed_card_bonus() {
        let mut placed = PlacedCard::new(card("Dawn Sentinel", Faction::Primary, 40));
        placed.power_bonus += 60;
        assert_eq!(placed.power(), 100);
    }

    #[test]
    fn test_placed_card_power_clamped_at_zero() {
        let mut placed = PlacedCard::new(card("Dawn Sentinel", Faction::Primary, 10));
        placed.power_bonus = -50;
        assert_eq!(placed.power(), 0);
    }

    #[test]
    fn test_lane_totals() {
        let mut lane = Lane::new();
        lane.sides[Side::Player]
            .cards
            .push_back(PlacedCard::new(card("A", Faction::Primary, 30)));
        lane.sides[Side::Player]
            .cards
            .push_back(PlacedCard::new(card("B", Faction::Primary, 20)));
        lane.sides[Side::Opponent]
            .cards
            .push_back(PlacedCard::new(card("C", Faction::Primary, 45)));

        assert_eq!(lane.total_power(Side::Player), 50);
        assert_eq!(lane.total_power(Side::Opponent), 45);
        assert_eq!(lane.card_count(Side::Player), 2);
    }

    #[test]
    fn test_lane_capacity() {
        let mut lane = Lane::new();
        assert!(!lane.is_full(Side::Player, 1));

        lane.sides[Side::Player]
            .cards
            .push_back(PlacedCard::new(card("A", Faction::Primary, 10)));
        assert!(lane.is_full(Side::Player, 1));
        assert!(!lane.is_full(Side::Opponent, 1));
    }
}
