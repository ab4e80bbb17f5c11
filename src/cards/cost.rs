//! Cost and power math. Pure functions, no side effects.
//!
//! Energy cost derives solely from rarity and foil tier; effective power
//! derives solely from base power and faction. The two never mix: foil
//! cannot change power, faction cannot change cost.

use super::card::{Card, Faction, FoilTier, Rarity};

/// Base energy cost for a rarity tier.
///
/// The same table doubles as the scheduler's priority weight - see
/// [`rarity_weight`].
#[must_use]
pub const fn rarity_base_cost(rarity: Rarity) -> i64 {
    match rarity {
        Rarity::Unranked => 1,
        Rarity::Common => 2,
        Rarity::Rare => 3,
        Rarity::Epic => 4,
        Rarity::Legendary => 5,
        Rarity::Mythic => 6,
    }
}

/// Scheduler priority weight for a rarity tier.
///
/// Within one side of one lane, cards resolve by descending weight
/// (Mythic first, Unranked last).
#[must_use]
pub const fn rarity_weight(rarity: Rarity) -> i64 {
    rarity_base_cost(rarity)
}

/// Energy cost to play a card.
///
/// Rarity sets the base cost, the foil discount is applied (Standard pays
/// half, floored; Prize plays free), and the result is clamped to a minimum
/// of 1.
///
/// ## Example
///
/// ```
/// use laneclash::cards::{energy_cost, Card, CardId, Faction, FoilTier, Rarity};
///
/// let card = Card::new(CardId::new(1), "Sun Titan", Faction::Primary, Rarity::Mythic, 90)
///     .with_foil(FoilTier::Standard);
/// assert_eq!(energy_cost(&card), 3); // floor(6 * 0.5)
/// ```
#[must_use]
pub fn energy_cost(card: &Card) -> i64 {
    let base = rarity_base_cost(card.rarity);
    let discounted = match card.foil {
        FoilTier::None => base,
        FoilTier::Standard => base / 2,
        FoilTier::Prize => 0,
    };
    discounted.max(1)
}

/// Effective power for lane totals, before ability/combo modifiers.
///
/// Penalty and off-collection cards count at half power (floored).
#[must_use]
pub fn effective_power(card: &Card) -> i64 {
    let base = i64::from(card.base_power);
    match card.faction {
        Faction::Penalty | Faction::Other => base / 2,
        Faction::Primary | Faction::Wildcard => base,
    }
}

/// Whether a card is playable with the given energy.
#[must_use]
pub fn can_afford(card: &Card, available_energy: i64) -> bool {
    energy_cost(card) <= available_energy
}
