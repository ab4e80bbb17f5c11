//! Ability definitions.
//!
//! Abilities are data, not behavior attached to cards. Each is a small
//! descriptor the resolution engine interprets with a total-match
//! dispatcher - adding a new effect kind is a compile-time-checked
//! exercise, not a runtime string typo risk.

use serde::{Deserialize, Serialize};

/// When an ability applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Applies once, when the card is revealed.
    OnReveal,
    /// A standing modifier that persists while the card is in its lane.
    Ongoing,
    /// Player-triggered; the engine applies it when scheduled like a reveal.
    Active,
}

/// Informational grouping for UI and analytics. Never drives effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityCategory {
    Offensive,
    Support,
    Control,
    Economy,
    Wildcard,
}

/// The concrete effect an ability has on the board.
///
/// Exhaustive by design: the resolution dispatcher matches every variant,
/// so a new effect cannot be silently ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityEffect {
    /// Flat power bonus to the ability's own card.
    GainPower(i64),
    /// Flat power bonus to every allied card in the same lane.
    BuffLane(i64),
    /// Flat power reduction to every enemy card in the same lane.
    DebuffEnemyLane(i64),
    /// Remove the weakest enemy card in the same lane.
    DestroyWeakestEnemy,
    /// Raise the card's power to match the strongest card on the field.
    CopyStrongestPower,
    /// Move up to this much power from the strongest enemy card in the
    /// lane to the ability's own card.
    StealPower(i64),
    /// Add directly to the owning side's score.
    GainScore(i64),
}

/// A card ability, keyed in the registry by normalized card name.
///
/// ## Example
///
/// ```
/// use laneclash::abilities::{Ability, AbilityCategory, AbilityEffect, AbilityKind};
///
/// let ability = Ability::new(
///     AbilityKind::OnReveal,
///     AbilityCategory::Offensive,
///     AbilityEffect::DebuffEnemyLane(10),
/// )
/// .with_sound("war-horn");
///
/// assert_eq!(ability.sound.as_deref(), Some("war-horn"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// When the effect applies.
    pub kind: AbilityKind,

    /// Informational grouping.
    pub category: AbilityCategory,

    /// What the ability does.
    pub effect: AbilityEffect,

    /// Sound/visual descriptor for the external renderer. Never used for
    /// effect computation.
    pub sound: Option<String>,
}

impl Ability {
    /// Create a new ability.
    #[must_use]
    pub fn new(kind: AbilityKind, category: AbilityCategory, effect: AbilityEffect) -> Self {
        Self {
            kind,
            category,
            effect,
            sound: None,
        }
    }

    /// Attach a renderer sound descriptor (builder pattern).
    #[must_use]
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_builder() {
        let ability = Ability::new(
            AbilityKind::Ongoing,
            AbilityCategory::Support,
            AbilityEffect::BuffLane(5),
        );

        assert_eq!(ability.kind, AbilityKind::Ongoing);
        assert_eq!(ability.effect, AbilityEffect::BuffLane(5));
        assert!(ability.sound.is_none());
    }

    #[test]
    fn test_ability_with_sound() {
        let ability = Ability::new(
            AbilityKind::OnReveal,
            AbilityCategory::Control,
            AbilityEffect::DestroyWeakestEnemy,
        )
        .with_sound("shatter");

        assert_eq!(ability.sound.as_deref(), Some("shatter"));
    }

    #[test]
    fn test_effect_serde_roundtrip() {
        let effect = AbilityEffect::StealPower(15);
        let json = serde_json::to_string(&effect).unwrap();
        let back: AbilityEffect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, back);
    }
}
