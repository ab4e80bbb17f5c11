//! Snapshot diffing: turn two successive snapshots into a timed event queue.
//!
//! Pure and idempotent - building twice from the same pair yields an
//! identical queue. Each lane side runs its own delay cursor from zero
//! (lanes animate in parallel); the final queue is stable-sorted by delay,
//! so ties keep lane-then-side insertion order.

use rustc_hash::FxHashMap;

use super::event::{AnimationEvent, EventType};
use crate::abilities::AbilityRegistry;
use crate::battle::{Lane, MatchSnapshot, PlacedCard, TurnPlays};
use crate::cards::CardId;
use crate::combos::ComboDetector;
use crate::core::Side;

/// Delay increment for each revealed or removed card.
pub const REVEAL_STEP_MS: u32 = 200;

/// Additional delay for a revealed card's ability flourish.
pub const ABILITY_STEP_MS: u32 = 400;

/// Offset of a lane's combo events past its other events.
pub const COMBO_OFFSET_MS: u32 = 600;

/// Diff two snapshots into an ordered animation/sound event queue.
///
/// Per lane, independently per side, comparing card multisets by id (a
/// turn can both reveal and destroy cards on the same side):
/// - cards present now but not before emit `Reveal` (one step each), each
///   followed by an `Ability` event when the registry lookup is non-empty;
/// - cards present before but gone now emit `Destroy`;
/// - a total-power change emits `Buff` or `Debuff` carrying the signed
///   delta.
///
/// After per-lane events, the detector runs over every lane's final state
/// under the same per-play combo choices the resolution honored, and
/// appends `Combo` events offset past that lane's other events.
pub fn build_animation_queue(
    prev: &MatchSnapshot,
    next: &MatchSnapshot,
    plays: &TurnPlays,
    registry: &AbilityRegistry,
    detector: &mut ComboDetector,
) -> Vec<AnimationEvent> {
    let mut events = Vec::new();
    let empty_lane = Lane::new();
    let mut lane_last_delay = vec![0u32; next.lanes.len()];

    for (lane_idx, lane) in next.lanes.iter().enumerate() {
        let prev_lane = prev.lanes.get(lane_idx).unwrap_or(&empty_lane);

        for side in Side::BOTH {
            let prev_side = &prev_lane.sides[side];
            let next_side = &lane.sides[side];
            let mut cursor = 0u32;

            for placed in appended_cards(prev_side.cards.iter(), next_side.cards.iter()) {
                cursor += REVEAL_STEP_MS;
                events.push(
                    AnimationEvent::new(EventType::Reveal, cursor, lane_idx, side)
                        .with_card_name(placed.card.name.clone()),
                );
                if let Some(ability) = registry.lookup(&placed.card) {
                    cursor += ABILITY_STEP_MS;
                    let mut event =
                        AnimationEvent::new(EventType::Ability, cursor, lane_idx, side)
                            .with_card_name(placed.card.name.clone());
                    if let Some(sound) = &ability.sound {
                        event = event.with_sound(sound.clone());
                    }
                    events.push(event);
                }
            }

            for name in removed_card_names(prev_side.cards.iter(), next_side.cards.iter()) {
                cursor += REVEAL_STEP_MS;
                events.push(
                    AnimationEvent::new(EventType::Destroy, cursor, lane_idx, side)
                        .with_card_name(name),
                );
            }

            let delta = next_side.total_power() - prev_side.total_power();
            if delta != 0 {
                cursor += REVEAL_STEP_MS;
                let event_type = if delta > 0 {
                    EventType::Buff
                } else {
                    EventType::Debuff
                };
                events.push(
                    AnimationEvent::new(event_type, cursor, lane_idx, side).with_power_delta(delta),
                );
            }

            lane_last_delay[lane_idx] = lane_last_delay[lane_idx].max(cursor);
        }
    }

    // Combo pass over the final state of every lane, every side.
    for (lane_idx, lane) in next.lanes.iter().enumerate() {
        for side in Side::BOTH {
            let cards = lane.sides[side].bare_cards();
            if cards.is_empty() {
                continue;
            }
            let assignment = plays.combo_choice(side, lane_idx);
            if let Some(m) = detector.active(registry, &cards, assignment) {
                events.push(
                    AnimationEvent::new(
                        EventType::Combo,
                        lane_last_delay[lane_idx] + COMBO_OFFSET_MS,
                        lane_idx,
                        side,
                    )
                    .with_combo(m.combo_id),
                );
            }
        }
    }

    // Stable: ties keep lane-then-side insertion order
    events.sort_by_key(|e| e.delay_ms);
    events
}

/// Cards present now but not before, multiset-aware by card id.
fn appended_cards<'a>(
    prev: impl Iterator<Item = &'a PlacedCard>,
    next: impl Iterator<Item = &'a PlacedCard>,
) -> Vec<&'a PlacedCard> {
    let mut carried: FxHashMap<CardId, usize> = FxHashMap::default();
    for placed in prev {
        *carried.entry(placed.card.id).or_insert(0) += 1;
    }

    let mut appended = Vec::new();
    for placed in next {
        match carried.get_mut(&placed.card.id) {
            Some(count) if *count > 0 => *count -= 1,
            _ => appended.push(placed),
        }
    }
    appended
}

/// Names of cards present before but gone now, multiset-aware by card id.
fn removed_card_names<'a>(
    prev: impl Iterator<Item = &'a PlacedCard>,
    next: impl Iterator<Item = &'a PlacedCard>,
) -> Vec<String> {
    let mut surviving: FxHashMap<CardId, usize> = FxHashMap::default();
    for placed in next {
        *surviving.entry(placed.card.id).or_insert(0) += 1;
    }

    let mut removed = Vec::new();
    for placed in prev {
        match surviving.get_mut(&placed.card.id) {
            Some(count) if *count > 0 => *count -= 1,
            _ => removed.push(placed.card.name.clone()),
        }
    }
    removed
}
