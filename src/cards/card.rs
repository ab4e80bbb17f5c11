//! Card data model.
//!
//! A `Card` is immutable once dealt into a lane. Deck/hand composition rules
//! (minimum primary cards, penalty caps, the one-wildcard limit) are enforced
//! at deck-build time by the collection layer - the battle engine assumes a
//! valid hand and only validates the payload shape at its boundary.

use serde::{Deserialize, Serialize};

use crate::core::BattleError;

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which collection a card belongs to.
///
/// Faction feeds into effective power (Penalty and Other cards count at half
/// power) and into combo detection (Wildcard cards substitute for missing
/// combo requirements). It never affects energy cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    /// The primary collection.
    Primary,
    /// Penalty cards count at half power.
    Penalty,
    /// Scarce stand-in cards for combo requirements.
    Wildcard,
    /// Off-collection cards, also halved.
    Other,
}

/// Card rarity tier.
///
/// Drives energy cost and scheduler priority via the same tier table.
/// `Unranked` covers cards outside the five named tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Unranked,
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

/// Foil tier - cosmetic/economic only.
///
/// Foil reduces play cost (Standard halves it, Prize makes it free) but
/// never changes power.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoilTier {
    #[default]
    None,
    Standard,
    Prize,
}

/// Cosmetic wear grade. No gameplay effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wear(pub u8);

/// A collectible card.
///
/// ## Example
///
/// ```
/// use laneclash::cards::{Card, CardId, Faction, FoilTier, Rarity};
///
/// let card = Card::new(CardId::new(1), "Dawn Sentinel", Faction::Primary, Rarity::Rare, 40)
///     .with_foil(FoilTier::Standard);
///
/// assert_eq!(card.base_power, 40);
/// assert_eq!(card.foil, FoilTier::Standard);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identity.
    pub id: CardId,

    /// Card name - the key into the ability registry after alias resolution.
    pub name: String,

    /// Collection this card belongs to.
    pub faction: Faction,

    /// Rarity tier.
    pub rarity: Rarity,

    /// Base power before faction penalties and modifiers.
    pub base_power: u32,

    /// Foil tier (cost only, never power).
    pub foil: FoilTier,

    /// Cosmetic wear (no gameplay effect).
    pub wear: Wear,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        faction: Faction,
        rarity: Rarity,
        base_power: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            faction,
            rarity,
            base_power,
            foil: FoilTier::None,
            wear: Wear::default(),
        }
    }

    /// Set the foil tier (builder pattern).
    #[must_use]
    pub fn with_foil(mut self, foil: FoilTier) -> Self {
        self.foil = foil;
        self
    }

    /// Set the wear grade (builder pattern).
    #[must_use]
    pub fn with_wear(mut self, wear: Wear) -> Self {
        self.wear = wear;
        self
    }

    /// Boundary validation for externally supplied card payloads.
    ///
    /// The pure core assumes validated input; this is the one check applied
    /// where payloads enter the engine.
    pub fn validate(&self) -> Result<(), BattleError> {
        if self.name.trim().is_empty() {
            return Err(BattleError::InvalidCardData(format!(
                "{} has an empty name",
                self.id
            )));
        }
        Ok(())
    }
}
