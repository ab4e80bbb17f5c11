//! Match state machine and turn resolution.
//!
//! The phase cycle is `card-selection → reveal → resolution`, looping back
//! to selection each turn until a side reaches the win threshold or the
//! turn limit runs out. Committing a play outside card-selection is a
//! usage error, not a game outcome.
//!
//! `resolve_turn` is the deterministic core: given a snapshot, the turn's
//! plays, and an RNG seed, it produces the next snapshot. Two invocations
//! with the same inputs produce identical output, which is what replay and
//! host/client cross-checking rely on.

use rustc_hash::FxHashMap;

use super::lane::PlacedCard;
use super::plays::{CardPlay, TurnPlays};
use super::scheduler::{schedule, Placement, ResolutionStep};
use super::snapshot::{MatchSnapshot, Phase};
use crate::abilities::{AbilityEffect, AbilityRegistry};
use crate::cards::Faction;
use crate::combos::{BonusKind, BonusScope, ComboBonus, ComboDetector, ComboMatch};
use crate::core::{BattleError, BattleRng, ConfigError, MatchConfig, Side};

/// Sentinel for resolution steps whose card was destroyed before they ran.
const INVALID_STEP: usize = usize::MAX;

/// Drives one match from selection to game-over.
///
/// Owns the ability registry and combo detector so concurrent matches stay
/// fully independent - there is no process-wide state anywhere in the
/// engine.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    registry: AbilityRegistry,
    detector: ComboDetector,
    snapshot: MatchSnapshot,
    pending: TurnPlays,
}

impl MatchEngine {
    /// Create an engine, running the load-time validation pass over the
    /// combo definitions.
    pub fn new(
        config: MatchConfig,
        registry: AbilityRegistry,
        detector: ComboDetector,
    ) -> Result<Self, ConfigError> {
        registry.validate(detector.definitions())?;
        let snapshot = MatchSnapshot::new(&config);
        Ok(Self {
            config,
            registry,
            detector,
            snapshot,
            pending: TurnPlays::new(),
        })
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &MatchSnapshot {
        &self.snapshot
    }

    /// The match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The ability registry.
    #[must_use]
    pub fn registry(&self) -> &AbilityRegistry {
        &self.registry
    }

    /// Mutable access to the combo detector (its memo cache updates on
    /// detection).
    pub fn detector_mut(&mut self) -> &mut ComboDetector {
        &mut self.detector
    }

    /// Plays committed so far this turn.
    #[must_use]
    pub fn pending_plays(&self) -> &TurnPlays {
        &self.pending
    }

    /// Commit one play for the current turn.
    ///
    /// Rejected synchronously, with no state change, when the match is not
    /// in card-selection, the lane does not exist, the lane side is full
    /// (counting plays already committed this turn), or the card payload
    /// is malformed.
    pub fn commit_play(&mut self, play: CardPlay) -> Result<(), BattleError> {
        if self.snapshot.phase != Phase::CardSelection {
            return Err(BattleError::PhaseViolation {
                phase: self.snapshot.phase,
            });
        }
        if play.lane >= self.config.lanes {
            return Err(BattleError::UnknownLane {
                lane: play.lane,
                lanes: self.config.lanes,
            });
        }
        play.card.validate()?;

        let committed = self
            .pending
            .plays()
            .iter()
            .filter(|p| p.side == play.side && p.lane == play.lane)
            .count();
        let occupied = self.snapshot.lanes[play.lane].card_count(play.side);
        if occupied + committed >= self.config.max_cards_per_lane {
            return Err(BattleError::LaneFull {
                lane: play.lane,
                capacity: self.config.max_cards_per_lane,
            });
        }

        self.pending.add(play);
        Ok(())
    }

    /// Whether every lane still in play has a committed card from both
    /// sides, which is what the reveal transition requires.
    #[must_use]
    pub fn ready_for_reveal(&self) -> bool {
        (0..self.config.lanes).all(|lane| {
            Side::BOTH.iter().all(|&side| {
                self.pending.has_play(side, lane)
                    || self.snapshot.lanes[lane].is_full(side, self.config.max_cards_per_lane)
            })
        })
    }

    /// Resolve the current turn with the committed plays.
    ///
    /// Requires card-selection phase and a full commitment from both
    /// sides. On success the pending plays are consumed and the engine's
    /// snapshot advances.
    pub fn resolve(&mut self, seed: u64) -> Result<&MatchSnapshot, BattleError> {
        if self.snapshot.phase != Phase::CardSelection || !self.ready_for_reveal() {
            return Err(BattleError::PhaseViolation {
                phase: self.snapshot.phase,
            });
        }
        let plays = std::mem::take(&mut self.pending);
        let previous = self.snapshot.clone();
        self.snapshot = self.resolve_turn(&previous, &plays, seed)?;
        Ok(&self.snapshot)
    }

    /// The deterministic resolution core: scheduler + state machine.
    ///
    /// Pure with respect to the engine's own snapshot - the input snapshot
    /// is never mutated, and the only internal state touched is the combo
    /// memo cache, which does not affect results.
    pub fn resolve_turn(
        &mut self,
        snapshot: &MatchSnapshot,
        plays: &TurnPlays,
        seed: u64,
    ) -> Result<MatchSnapshot, BattleError> {
        if snapshot.phase == Phase::GameOver {
            return Err(BattleError::PhaseViolation {
                phase: Phase::GameOver,
            });
        }
        self.validate_plays(snapshot, plays)?;

        let mut next = snapshot.clone();

        // Reveal: place every committed card.
        next.phase = Phase::Reveal;
        log::debug!("turn {}: reveal, {} plays", next.turn_number, plays.len());
        let mut placements = Vec::with_capacity(plays.len());
        for play in plays.plays() {
            let lane_side = &mut next.lanes[play.lane].sides[play.side];
            placements.push(Placement {
                lane: play.lane,
                side: play.side,
                card_index: lane_side.card_count(),
                rarity: play.card.rarity,
            });
            lane_side.cards.push_back(PlacedCard::new(play.card.clone()));
        }

        // Resolution: abilities in scheduled order, then combos, then scoring.
        next.phase = Phase::Resolution;
        let mut rng = BattleRng::new(seed);
        let mut steps = schedule(&placements, next.lanes.len(), &mut rng);
        for i in 0..steps.len() {
            let step = steps[i];
            if step.card_index == INVALID_STEP {
                continue;
            }
            if let Some(destroyed_index) = self.apply_step(&mut next, step) {
                retarget_after_destroy(
                    &mut steps[i + 1..],
                    step.lane,
                    step.side.opposite(),
                    destroyed_index,
                );
            }
        }
        self.apply_combos(&mut next, plays);
        score_turn(&mut next);

        // Advance or terminate.
        next.turn_number += 1;
        let won = Side::BOTH
            .iter()
            .any(|&s| next.scores[s] >= self.config.win_threshold);
        next.phase = if won || next.turn_number > self.config.turn_limit {
            Phase::GameOver
        } else {
            Phase::CardSelection
        };
        log::debug!(
            "turn {} resolved: scores {}/{}, next phase {}",
            snapshot.turn_number,
            next.scores[Side::Player],
            next.scores[Side::Opponent],
            next.phase
        );

        Ok(next)
    }

    /// Pre-pass so a rejected turn leaves no partial mutation anywhere.
    fn validate_plays(
        &self,
        snapshot: &MatchSnapshot,
        plays: &TurnPlays,
    ) -> Result<(), BattleError> {
        let mut added: FxHashMap<(usize, Side), usize> = FxHashMap::default();
        for play in plays.plays() {
            if play.lane >= snapshot.lanes.len() {
                return Err(BattleError::UnknownLane {
                    lane: play.lane,
                    lanes: snapshot.lanes.len(),
                });
            }
            play.card.validate()?;
            let count = added.entry((play.lane, play.side)).or_insert(0);
            *count += 1;
            if snapshot.lanes[play.lane].card_count(play.side) + *count
                > self.config.max_cards_per_lane
            {
                return Err(BattleError::LaneFull {
                    lane: play.lane,
                    capacity: self.config.max_cards_per_lane,
                });
            }
        }
        Ok(())
    }

    /// Apply one scheduled card's ability. Returns the index of a card
    /// destroyed in the opposing lane side, if any.
    fn apply_step(&self, next: &mut MatchSnapshot, step: ResolutionStep) -> Option<usize> {
        let card = next.lanes[step.lane].sides[step.side]
            .cards
            .get(step.card_index)?
            .card
            .clone();
        let ability = self.registry.lookup(&card)?.clone();
        log::debug!(
            "lane {} {}: '{}' resolves {:?}",
            step.lane,
            step.side,
            card.name,
            ability.effect
        );

        let enemy = step.side.opposite();
        match ability.effect {
            AbilityEffect::GainPower(amount) => {
                bump(next, step.lane, step.side, step.card_index, amount);
            }
            AbilityEffect::BuffLane(amount) => {
                for idx in 0..next.lanes[step.lane].card_count(step.side) {
                    bump(next, step.lane, step.side, idx, amount);
                }
            }
            AbilityEffect::DebuffEnemyLane(amount) => {
                for idx in 0..next.lanes[step.lane].card_count(enemy) {
                    bump(next, step.lane, enemy, idx, -amount);
                }
            }
            AbilityEffect::DestroyWeakestEnemy => {
                if let Some(idx) = extreme_index(next, step.lane, enemy, false) {
                    next.lanes[step.lane].sides[enemy].cards.remove(idx);
                    return Some(idx);
                }
            }
            AbilityEffect::CopyStrongestPower => {
                let strongest = strongest_power_on_field(next);
                let own = next.lanes[step.lane].sides[step.side].cards[step.card_index].power();
                if strongest > own {
                    bump(next, step.lane, step.side, step.card_index, strongest - own);
                }
            }
            AbilityEffect::StealPower(amount) => {
                if let Some(idx) = extreme_index(next, step.lane, enemy, true) {
                    let taken = amount.min(next.lanes[step.lane].sides[enemy].cards[idx].power());
                    bump(next, step.lane, enemy, idx, -taken);
                    bump(next, step.lane, step.side, step.card_index, taken);
                }
            }
            AbilityEffect::GainScore(amount) => {
                let score = i64::from(next.scores[step.side]) + amount;
                next.scores[step.side] = score.max(0) as u32;
            }
        }
        None
    }

    /// Evaluate and apply at most one combo per lane per side over the
    /// final lane states.
    fn apply_combos(&mut self, next: &mut MatchSnapshot, plays: &TurnPlays) {
        for lane in 0..next.lanes.len() {
            for side in Side::BOTH {
                let cards = next.lanes[lane].sides[side].bare_cards();
                if cards.is_empty() {
                    continue;
                }
                let assignment = plays.combo_choice(side, lane);
                let Some(m) = self.detector.active(&self.registry, &cards, assignment) else {
                    continue;
                };
                let Some(bonus) = self
                    .detector
                    .definitions()
                    .iter()
                    .find(|d| d.id == m.combo_id)
                    .map(|d| d.bonus.clone())
                else {
                    continue;
                };
                log::debug!("lane {lane} {side}: {} active", m.combo_id);
                apply_combo_bonus(next, lane, side, &m, &bonus, &self.registry);
            }
        }
    }
}

/// Add to one placed card's power modifier.
fn bump(next: &mut MatchSnapshot, lane: usize, side: Side, index: usize, delta: i64) {
    if let Some(placed) = next.lanes[lane].sides[side].cards.get_mut(index) {
        placed.power_bonus += delta;
    }
}

/// Index of the strongest (`max = true`) or weakest card in a lane side.
/// Ties go to the lowest index.
fn extreme_index(next: &MatchSnapshot, lane: usize, side: Side, max: bool) -> Option<usize> {
    let cards = &next.lanes[lane].sides[side].cards;
    if cards.is_empty() {
        return None;
    }
    let mut best = 0;
    for (idx, placed) in cards.iter().enumerate().skip(1) {
        let better = if max {
            placed.power() > cards[best].power()
        } else {
            placed.power() < cards[best].power()
        };
        if better {
            best = idx;
        }
    }
    Some(best)
}

/// Power of the strongest card anywhere on the field.
fn strongest_power_on_field(next: &MatchSnapshot) -> i64 {
    next.lanes
        .iter()
        .flat_map(|lane| lane.sides.iter().flat_map(|(_, s)| s.cards.iter()))
        .map(PlacedCard::power)
        .max()
        .unwrap_or(0)
}

/// After a destruction, shift later steps' indices down and invalidate the
/// step of the destroyed card itself.
fn retarget_after_destroy(
    steps: &mut [ResolutionStep],
    lane: usize,
    side: Side,
    removed_index: usize,
) {
    for step in steps {
        if step.lane == lane && step.side == side && step.card_index != INVALID_STEP {
            if step.card_index == removed_index {
                step.card_index = INVALID_STEP;
            } else if step.card_index > removed_index {
                step.card_index -= 1;
            }
        }
    }
}

/// Apply a combo bonus to its scope.
fn apply_combo_bonus(
    next: &mut MatchSnapshot,
    lane: usize,
    side: Side,
    m: &ComboMatch,
    bonus: &ComboBonus,
    registry: &AbilityRegistry,
) {
    let enemy = side.opposite();

    if bonus.kind == BonusKind::Steal {
        // Transfer from the strongest enemy card to the strongest allied
        // card in the lane, regardless of declared scope.
        if let (Some(from), Some(to)) = (
            extreme_index(next, lane, enemy, true),
            extreme_index(next, lane, side, true),
        ) {
            let taken = bonus.amount.min(next.lanes[lane].sides[enemy].cards[from].power());
            bump(next, lane, enemy, from, -taken);
            bump(next, lane, side, to, taken);
        }
        return;
    }

    let targets: Vec<(usize, Side, usize)> = match bonus.scope {
        BonusScope::MatchedCards => {
            let cards = &next.lanes[lane].sides[side].cards;
            cards
                .iter()
                .enumerate()
                .filter(|(_, p)| {
                    let canonical = registry.resolve_name(&p.card.name);
                    m.matched_card_names.contains(&canonical)
                        || (m.wildcards_used > 0 && p.card.faction == Faction::Wildcard)
                })
                .map(|(idx, _)| (lane, side, idx))
                .collect()
        }
        BonusScope::Lane => (0..next.lanes[lane].card_count(side))
            .map(|idx| (lane, side, idx))
            .collect(),
        BonusScope::AllLanes => (0..next.lanes.len())
            .flat_map(|l| (0..next.lanes[l].card_count(side)).map(move |idx| (l, side, idx)))
            .collect(),
        BonusScope::EnemyLane => (0..next.lanes[lane].card_count(enemy))
            .map(|idx| (lane, enemy, idx))
            .collect(),
    };

    for (l, s, idx) in targets {
        let delta = match bonus.kind {
            BonusKind::Power => bonus.amount,
            BonusKind::PowerPercent => {
                next.lanes[l].sides[s].cards[idx].power() * bonus.amount / 100
            }
            BonusKind::Steal => unreachable!("steal handled above"),
        };
        bump(next, l, s, idx, delta);
    }
}

/// Score the turn: the side winning strictly more lanes gains one point.
fn score_turn(next: &mut MatchSnapshot) {
    let wins = next.lane_wins();
    if wins[Side::Player] > wins[Side::Opponent] {
        next.scores[Side::Player] += 1;
    } else if wins[Side::Opponent] > wins[Side::Player] {
        next.scores[Side::Opponent] += 1;
    }
}
