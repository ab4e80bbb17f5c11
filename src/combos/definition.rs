//! Combo definitions.
//!
//! A combo is a named bonus unlocked when a specific set (or quota) of
//! named cards is present together in scope. Definition order is
//! significant: when a lane qualifies for several combos at once and the
//! caller supplies no explicit wildcard assignment, the first definition
//! wins.

use serde::{Deserialize, Serialize};

/// Unique identifier for a combo definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComboId(pub u32);

impl ComboId {
    /// Create a new combo ID.
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

impl std::fmt::Display for ComboId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Combo({})", self.0)
    }
}

/// How a combo bonus is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    /// Flat power added to each card in scope.
    Power,
    /// Percentage of each in-scope card's current power (may be negative).
    PowerPercent,
    /// Power transferred from the enemy lane's strongest card to the
    /// allied lane's strongest card.
    Steal,
}

/// Which cards a combo bonus touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusScope {
    /// Only the cards that matched the combo's requirements.
    MatchedCards,
    /// Every allied card in the combo's lane.
    Lane,
    /// Every allied card in every lane.
    AllLanes,
    /// The enemy cards in the combo's lane.
    EnemyLane,
}

/// The bonus a combo grants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboBonus {
    pub kind: BonusKind,
    pub amount: i64,
    pub scope: BonusScope,
}

/// A combo definition.
///
/// ## Example
///
/// ```
/// use laneclash::combos::{BonusKind, BonusScope, ComboBonus, ComboDefinition, ComboId};
///
/// let duo = ComboDefinition::new(
///     ComboId::new(1),
///     ["Dawn Sentinel", "Ember Fox"],
///     ComboBonus { kind: BonusKind::Power, amount: 60, scope: BonusScope::MatchedCards },
/// );
/// assert_eq!(duo.quota(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboDefinition {
    /// Unique identifier.
    pub id: ComboId,

    /// Required card names, matched by canonical name after alias
    /// resolution. Presence matters, duplicates do not.
    pub required_card_names: Vec<String>,

    /// Minimum distinct requirements that must be present (wildcards
    /// included). Defaults to the full list length.
    pub min_cards: Option<usize>,

    /// The bonus granted when the combo is active.
    pub bonus: ComboBonus,
}

impl ComboDefinition {
    /// Create a new combo requiring every listed card.
    #[must_use]
    pub fn new<I, S>(id: ComboId, required: I, bonus: ComboBonus) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            required_card_names: required.into_iter().map(Into::into).collect(),
            min_cards: None,
            bonus,
        }
    }

    /// Lower the quota below the full requirement list (builder pattern).
    #[must_use]
    pub fn with_min_cards(mut self, min_cards: usize) -> Self {
        self.min_cards = Some(min_cards);
        self
    }

    /// Effective quota: `min_cards`, defaulting to the full list length.
    #[must_use]
    pub fn quota(&self) -> usize {
        self.min_cards.unwrap_or(self.required_card_names.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bonus() -> ComboBonus {
        ComboBonus {
            kind: BonusKind::Power,
            amount: 10,
            scope: BonusScope::Lane,
        }
    }

    #[test]
    fn test_combo_id_display() {
        assert_eq!(format!("{}", ComboId::new(5)), "Combo(5)");
    }

    #[test]
    fn test_quota_defaults_to_full_list() {
        let combo = ComboDefinition::new(ComboId::new(1), ["A", "B", "C"], bonus());
        assert_eq!(combo.quota(), 3);
    }

    #[test]
    fn test_quota_override() {
        let combo = ComboDefinition::new(ComboId::new(1), ["A", "B", "C"], bonus())
            .with_min_cards(2);
        assert_eq!(combo.quota(), 2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let combo = ComboDefinition::new(ComboId::new(2), ["A"], bonus());
        let json = serde_json::to_string(&combo).unwrap();
        let back: ComboDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(combo, back);
    }
}
