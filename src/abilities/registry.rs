//! Ability registry: name normalization, alias resolution, and lookup.
//!
//! The registry is a static lookup table assembled at load time and read-only
//! afterwards. Lookup never fails - an unknown canonical name yields "no
//! ability", which is a valid, common case.
//!
//! Wildcard-collection cards bypass the name table entirely: every wildcard
//! card shares one identity slot per hand, so its ability derives purely from
//! rarity via a fixed five-entry table.

use rustc_hash::{FxHashMap, FxHashSet};

use super::ability::{Ability, AbilityCategory, AbilityEffect, AbilityKind};
use crate::cards::{Card, Faction, Rarity};
use crate::combos::ComboDefinition;
use crate::core::ConfigError;

/// Normalize a raw card name: trim, lowercase, collapse inner whitespace.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Static lookup table of per-card abilities.
///
/// ## Example
///
/// ```
/// use laneclash::abilities::{Ability, AbilityCategory, AbilityEffect, AbilityKind, AbilityRegistry};
/// use laneclash::cards::{Card, CardId, Faction, Rarity};
///
/// let registry = AbilityRegistry::new()
///     .with_alias("Dawn Sentinel (Promo)", "Dawn Sentinel")
///     .with_ability(
///         "Dawn Sentinel",
///         Ability::new(
///             AbilityKind::OnReveal,
///             AbilityCategory::Support,
///             AbilityEffect::BuffLane(5),
///         ),
///     );
///
/// let promo = Card::new(CardId::new(1), "dawn sentinel  (promo)", Faction::Primary, Rarity::Rare, 40);
/// assert!(registry.lookup(&promo).is_some());
/// ```
#[derive(Clone, Debug)]
pub struct AbilityRegistry {
    /// Normalized variant name -> canonical name (many-to-one).
    aliases: FxHashMap<String, String>,

    /// Canonical name -> ability.
    abilities: FxHashMap<String, Ability>,

    /// Canonical names of known cards without abilities, so combo
    /// validation can tell "vanilla card" from "typo".
    catalog: FxHashSet<String>,

    /// Fixed per-rarity table for wildcard-collection cards.
    wildcard: FxHashMap<Rarity, Ability>,
}

impl AbilityRegistry {
    /// Create a registry with the standard wildcard table and no named
    /// abilities.
    #[must_use]
    pub fn new() -> Self {
        Self {
            aliases: FxHashMap::default(),
            abilities: FxHashMap::default(),
            catalog: FxHashSet::default(),
            wildcard: standard_wildcard_table(),
        }
    }

    /// Register an alias mapping a cosmetic name variant to a canonical name.
    #[must_use]
    pub fn with_alias(mut self, variant: &str, canonical: &str) -> Self {
        self.aliases
            .insert(normalize_name(variant), normalize_name(canonical));
        self
    }

    /// Register an ability under a canonical card name.
    #[must_use]
    pub fn with_ability(mut self, name: &str, ability: Ability) -> Self {
        self.abilities.insert(normalize_name(name), ability);
        self
    }

    /// Register a card name with no ability, for combo validation.
    #[must_use]
    pub fn with_card_name(mut self, name: &str) -> Self {
        self.catalog.insert(normalize_name(name));
        self
    }

    /// Override one entry of the wildcard per-rarity table.
    #[must_use]
    pub fn with_wildcard_ability(mut self, rarity: Rarity, ability: Ability) -> Self {
        self.wildcard.insert(rarity, ability);
        self
    }

    /// Resolve a raw card name to its canonical form.
    ///
    /// Applies normalization, then the alias table. Unresolved names pass
    /// through normalized - this is not an error.
    #[must_use]
    pub fn resolve_name(&self, raw: &str) -> String {
        let normalized = normalize_name(raw);
        match self.aliases.get(&normalized) {
            Some(canonical) => canonical.clone(),
            None => normalized,
        }
    }

    /// Look up a card's ability.
    ///
    /// Wildcard-faction cards use the fixed per-rarity table; everything
    /// else goes through name resolution. Returns `None` for cards with no
    /// ability - never an error.
    #[must_use]
    pub fn lookup(&self, card: &Card) -> Option<&Ability> {
        if card.faction == Faction::Wildcard {
            // Unranked wildcards fall back to the Common entry.
            return self
                .wildcard
                .get(&card.rarity)
                .or_else(|| self.wildcard.get(&Rarity::Common));
        }
        self.abilities.get(&self.resolve_name(&card.name))
    }

    /// Whether a canonical name is known to the registry (ability or
    /// catalog entry).
    #[must_use]
    pub fn knows(&self, canonical: &str) -> bool {
        self.abilities.contains_key(canonical) || self.catalog.contains(canonical)
    }

    /// Load-time validation pass over combo definitions.
    ///
    /// Every combo-required name must resolve to a known card; a reference
    /// that resolves to nothing would silently never match at runtime, so
    /// it is flagged here as a configuration defect instead.
    pub fn validate(&self, combos: &[ComboDefinition]) -> Result<(), ConfigError> {
        let mut seen = FxHashSet::default();
        for combo in combos {
            if !seen.insert(combo.id) {
                return Err(ConfigError::DuplicateComboId(combo.id));
            }
            if combo.quota() > combo.required_card_names.len() {
                return Err(ConfigError::QuotaExceedsRequirements {
                    combo: combo.id,
                    quota: combo.quota(),
                    required: combo.required_card_names.len(),
                });
            }
            for name in &combo.required_card_names {
                let canonical = self.resolve_name(name);
                if !self.knows(&canonical) {
                    return Err(ConfigError::UnknownComboCard {
                        combo: combo.id,
                        name: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for AbilityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed five-entry wildcard table, one ability per rarity tier.
fn standard_wildcard_table() -> FxHashMap<Rarity, Ability> {
    let mut table = FxHashMap::default();
    table.insert(
        Rarity::Common,
        Ability::new(
            AbilityKind::OnReveal,
            AbilityCategory::Wildcard,
            AbilityEffect::GainPower(10),
        )
        .with_sound("chime"),
    );
    table.insert(
        Rarity::Rare,
        Ability::new(
            AbilityKind::OnReveal,
            AbilityCategory::Wildcard,
            AbilityEffect::BuffLane(5),
        )
        .with_sound("chorus"),
    );
    table.insert(
        Rarity::Epic,
        Ability::new(
            AbilityKind::OnReveal,
            AbilityCategory::Wildcard,
            AbilityEffect::StealPower(10),
        )
        .with_sound("siphon"),
    );
    table.insert(
        Rarity::Legendary,
        Ability::new(
            AbilityKind::OnReveal,
            AbilityCategory::Wildcard,
            AbilityEffect::CopyStrongestPower,
        )
        .with_sound("mirror"),
    );
    table.insert(
        Rarity::Mythic,
        Ability::new(
            AbilityKind::OnReveal,
            AbilityCategory::Wildcard,
            AbilityEffect::DestroyWeakestEnemy,
        )
        .with_sound("shatter"),
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;
    use crate::combos::{BonusKind, BonusScope, ComboBonus, ComboDefinition, ComboId};

    fn named_card(name: &str) -> Card {
        Card::new(CardId::new(1), name, Faction::Primary, Rarity::Common, 10)
    }

    fn wildcard_card(rarity: Rarity) -> Card {
        Card::new(CardId::new(2), "Any Face", Faction::Wildcard, rarity, 10)
    }

    fn buff_ability() -> Ability {
        Ability::new(
            AbilityKind::OnReveal,
            AbilityCategory::Support,
            AbilityEffect::BuffLane(5),
        )
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Dawn   Sentinel "), "dawn sentinel");
        assert_eq!(normalize_name("EMBER FOX"), "ember fox");
    }

    #[test]
    fn test_resolve_name_applies_alias() {
        let registry = AbilityRegistry::new().with_alias("Dawn Sentinel (Promo)", "Dawn Sentinel");

        assert_eq!(
            registry.resolve_name("  dawn SENTINEL  (promo)"),
            "dawn sentinel"
        );
        // Unresolved names pass through normalized
        assert_eq!(registry.resolve_name("Unknown Card"), "unknown card");
    }

    #[test]
    fn test_lookup_unknown_name_is_none() {
        let registry = AbilityRegistry::new();
        assert!(registry.lookup(&named_card("Nobody Home")).is_none());
    }

    #[test]
    fn test_lookup_through_alias() {
        let registry = AbilityRegistry::new()
            .with_alias("Dawn Sentinel (Promo)", "Dawn Sentinel")
            .with_ability("Dawn Sentinel", buff_ability());

        let card = named_card("Dawn Sentinel (Promo)");
        assert_eq!(registry.lookup(&card), Some(&buff_ability()));
    }

    #[test]
    fn test_wildcard_ignores_name_table() {
        let registry = AbilityRegistry::new().with_ability("Any Face", buff_ability());

        // A wildcard named identically to a registered ability still uses
        // the rarity table.
        let card = wildcard_card(Rarity::Mythic);
        let ability = registry.lookup(&card).unwrap();
        assert_eq!(ability.effect, AbilityEffect::DestroyWeakestEnemy);
    }

    #[test]
    fn test_wildcard_table_covers_all_tiers() {
        let registry = AbilityRegistry::new();
        for rarity in [
            Rarity::Common,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Mythic,
        ] {
            assert!(registry.lookup(&wildcard_card(rarity)).is_some());
        }
        // Unranked falls back to the Common entry
        let ability = registry.lookup(&wildcard_card(Rarity::Unranked)).unwrap();
        assert_eq!(ability.effect, AbilityEffect::GainPower(10));
    }

    #[test]
    fn test_validate_flags_unknown_combo_card() {
        let registry = AbilityRegistry::new().with_ability("Dawn Sentinel", buff_ability());

        let combos = vec![ComboDefinition::new(
            ComboId::new(1),
            ["Dawn Sentinel", "Ghost Card"],
            ComboBonus {
                kind: BonusKind::Power,
                amount: 60,
                scope: BonusScope::MatchedCards,
            },
        )];

        let err = registry.validate(&combos).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownComboCard { name, .. } if name == "Ghost Card"));
    }

    #[test]
    fn test_validate_accepts_catalog_names() {
        let registry = AbilityRegistry::new()
            .with_ability("Dawn Sentinel", buff_ability())
            .with_card_name("Quiet Pebble");

        let combos = vec![ComboDefinition::new(
            ComboId::new(1),
            ["Dawn Sentinel", "Quiet Pebble"],
            ComboBonus {
                kind: BonusKind::Power,
                amount: 60,
                scope: BonusScope::MatchedCards,
            },
        )];

        assert!(registry.validate(&combos).is_ok());
    }

    #[test]
    fn test_validate_flags_duplicate_combo_id() {
        let registry = AbilityRegistry::new().with_card_name("A").with_card_name("B");
        let bonus = ComboBonus {
            kind: BonusKind::Power,
            amount: 10,
            scope: BonusScope::Lane,
        };
        let combos = vec![
            ComboDefinition::new(ComboId::new(1), ["A"], bonus.clone()),
            ComboDefinition::new(ComboId::new(1), ["B"], bonus),
        ];

        assert_eq!(
            registry.validate(&combos),
            Err(ConfigError::DuplicateComboId(ComboId::new(1)))
        );
    }

    #[test]
    fn test_validate_flags_oversized_quota() {
        let registry = AbilityRegistry::new().with_card_name("A");
        let combos = vec![ComboDefinition::new(
            ComboId::new(1),
            ["A"],
            ComboBonus {
                kind: BonusKind::Power,
                amount: 10,
                scope: BonusScope::Lane,
            },
        )
        .with_min_cards(3)];

        assert!(matches!(
            registry.validate(&combos),
            Err(ConfigError::QuotaExceedsRequirements { .. })
        ));
    }
}
