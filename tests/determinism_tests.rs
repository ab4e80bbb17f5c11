//! Property tests for the pure kernels: cost arithmetic, detection,
//! cache bounds, and seed-for-seed reproducibility.

use proptest::prelude::*;

use laneclash::{
    build_animation_queue, effective_power, energy_cost, AbilityRegistry, BonusKind, BonusScope,
    Card, CardId, CardPlay, ComboBonus, ComboDefinition, ComboDetector, ComboId, Faction,
    FoilTier, MatchConfig, MatchEngine, MatchSnapshot, PlacedCard, Rarity, Side, TurnPlays,
};

fn any_rarity() -> impl Strategy<Value = Rarity> {
    prop::sample::select(vec![
        Rarity::Unranked,
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ])
}

fn any_faction() -> impl Strategy<Value = Faction> {
    prop::sample::select(vec![
        Faction::Primary,
        Faction::Penalty,
        Faction::Wildcard,
        Faction::Other,
    ])
}

fn card(id: u32, name: &str, power: u32) -> Card {
    Card::new(CardId::new(id), name, Faction::Primary, Rarity::Common, power)
}

fn named_registry(names: &[&str]) -> AbilityRegistry {
    names
        .iter()
        .fold(AbilityRegistry::new(), |r, n| r.with_card_name(n))
}

const POOL: [&str; 6] = ["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot"];

fn pool_combos() -> Vec<ComboDefinition> {
    let bonus = ComboBonus {
        kind: BonusKind::Power,
        amount: 10,
        scope: BonusScope::Lane,
    };
    vec![
        ComboDefinition::new(ComboId::new(1), ["Alpha", "Bravo"], bonus.clone()),
        ComboDefinition::new(ComboId::new(2), ["Charlie", "Delta", "Echo"], bonus),
    ]
}

fn matched_ids(detector: &mut ComboDetector, registry: &AbilityRegistry, cards: &[Card]) -> Vec<u32> {
    let mut ids: Vec<u32> = detector
        .detect(registry, cards)
        .iter()
        .map(|m| m.combo_id.raw())
        .collect();
    ids.sort_unstable();
    ids
}

proptest! {
    /// Energy cost never drops below one, whatever the rarity and foil.
    #[test]
    fn prop_energy_cost_floor(rarity in any_rarity(), foil_idx in 0usize..3) {
        let foil = [FoilTier::None, FoilTier::Standard, FoilTier::Prize][foil_idx];
        let c = Card::new(CardId::new(1), "Any", Faction::Primary, rarity, 10).with_foil(foil);
        prop_assert!(energy_cost(&c) >= 1);
    }

    /// Foil tiers only ever make a card cheaper, never dearer.
    #[test]
    fn prop_foil_discount_monotone(rarity in any_rarity()) {
        let plain = Card::new(CardId::new(1), "Any", Faction::Primary, rarity, 10);
        let full = energy_cost(&plain);
        let half = energy_cost(&plain.clone().with_foil(FoilTier::Standard));
        let free = energy_cost(&plain.with_foil(FoilTier::Prize));
        prop_assert!(full >= half);
        prop_assert!(half >= free);
    }

    /// Penalty and off-faction cards fight at half power, floored.
    #[test]
    fn prop_effective_power_halving(faction in any_faction(), power in 0u32..10_000) {
        let c = Card::new(CardId::new(1), "Any", faction, Rarity::Common, power);
        let expected = match faction {
            Faction::Penalty | Faction::Other => (power / 2) as i64,
            Faction::Primary | Faction::Wildcard => power as i64,
        };
        prop_assert_eq!(effective_power(&c), expected);
    }

    /// Detection sees a hand as a multiset: any rotation of the same
    /// cards matches the same combos.
    #[test]
    fn prop_detect_order_invariant(
        picks in prop::collection::vec(0usize..POOL.len(), 0..8),
        rotation in 0usize..8,
    ) {
        let registry = named_registry(&POOL);
        let cards: Vec<Card> = picks
            .iter()
            .enumerate()
            .map(|(i, &p)| card(i as u32, POOL[p], 10))
            .collect();

        let mut rotated = cards.clone();
        if !rotated.is_empty() {
            let mid = rotation % rotated.len();
            rotated.rotate_left(mid);
        }

        let mut detector = ComboDetector::new(pool_combos());
        let straight = matched_ids(&mut detector, &registry, &cards);
        let turned = matched_ids(&mut detector, &registry, &rotated);
        prop_assert_eq!(straight, turned);
    }

    /// The detection cache never outgrows its capacity.
    #[test]
    fn prop_cache_stays_bounded(capacity in 1usize..8, hands in 1usize..40) {
        let registry = AbilityRegistry::new();
        let mut detector =
            ComboDetector::with_cache_capacity(pool_combos(), capacity);

        for i in 0..hands {
            let hand = [card(i as u32, &format!("Solo {i}"), 10)];
            let _ = detector.detect(&registry, &hand);
        }
        prop_assert!(detector.cache_len() <= capacity);
    }

    /// A seed and a set of plays fully determine the next snapshot.
    #[test]
    fn prop_same_seed_same_outcome(
        seed in any::<u64>(),
        powers in prop::collection::vec((1u32..100, 1u32..100), 3),
    ) {
        let mut plays = TurnPlays::new();
        for (lane, &(ours, theirs)) in powers.iter().enumerate() {
            plays = plays
                .with_play(CardPlay::new(
                    Side::Player,
                    lane,
                    card(lane as u32 * 2, "Ours", ours),
                ))
                .with_play(CardPlay::new(
                    Side::Opponent,
                    lane,
                    card(lane as u32 * 2 + 1, "Theirs", theirs),
                ));
        }

        let registry = AbilityRegistry::new();
        let config = MatchConfig::default();
        let start = MatchSnapshot::new(&config);

        let mut engine_a =
            MatchEngine::new(config.clone(), registry.clone(), ComboDetector::new(Vec::new()))
                .unwrap();
        let mut engine_b =
            MatchEngine::new(config, registry, ComboDetector::new(Vec::new())).unwrap();

        let next_a = engine_a.resolve_turn(&start, &plays, seed).unwrap();
        let next_b = engine_b.resolve_turn(&start, &plays, seed).unwrap();
        prop_assert_eq!(next_a, next_b);
    }

    /// Queues built from arbitrary placements come out sorted by delay.
    #[test]
    fn prop_queue_delays_sorted(
        placements in prop::collection::vec((0usize..3, any::<bool>(), 1u32..50), 0..10),
    ) {
        let registry = AbilityRegistry::new();
        let config = MatchConfig::default();
        let prev = MatchSnapshot::new(&config);
        let mut next = prev.clone();

        for (i, &(lane, player, power)) in placements.iter().enumerate() {
            let side = if player { Side::Player } else { Side::Opponent };
            next.lanes[lane].sides[side]
                .cards
                .push_back(PlacedCard::new(card(i as u32, "Placed", power)));
        }

        let mut detector = ComboDetector::new(Vec::new());
        let events = build_animation_queue(&prev, &next, &TurnPlays::new(), &registry, &mut detector);
        for pair in events.windows(2) {
            prop_assert!(pair[0].delay_ms <= pair[1].delay_ms);
        }
    }
}
