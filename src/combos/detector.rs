//! Combo detection over card multisets.
//!
//! Detection is order-insensitive: only which canonical names are present
//! (and how many wildcards) matters, never play order. Results are memoized
//! under a canonical multiset key, so the same lane contents always hit the
//! cache regardless of ordering.

use serde::{Deserialize, Serialize};

use rustc_hash::FxHashSet;

use super::cache::LruCache;
use super::definition::{ComboDefinition, ComboId};
use crate::abilities::AbilityRegistry;
use crate::cards::{Card, Faction};

/// Default memo cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// One available combo for a card set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboMatch {
    /// The matched definition.
    pub combo_id: ComboId,

    /// Canonical names of the required cards actually present.
    pub matched_card_names: Vec<String>,

    /// How many wildcard cards stand in for missing requirements.
    pub wildcards_used: usize,
}

/// Detects available combos in lane (or board-wide) card sets.
///
/// Owns its definitions and a bounded LRU memo cache. Definition order is
/// the tie-break order: at most one combo applies per lane per evaluation,
/// and without an explicit wildcard assignment the first available
/// definition wins.
#[derive(Clone, Debug)]
pub struct ComboDetector {
    definitions: Vec<ComboDefinition>,
    cache: LruCache<Vec<ComboMatch>>,
}

impl ComboDetector {
    /// Create a detector with the default cache capacity.
    #[must_use]
    pub fn new(definitions: Vec<ComboDefinition>) -> Self {
        Self::with_cache_capacity(definitions, DEFAULT_CACHE_CAPACITY)
    }

    /// Create a detector with an explicit cache capacity.
    #[must_use]
    pub fn with_cache_capacity(definitions: Vec<ComboDefinition>, capacity: usize) -> Self {
        Self {
            definitions,
            cache: LruCache::new(capacity),
        }
    }

    /// The combo definitions, in tie-break order.
    #[must_use]
    pub fn definitions(&self) -> &[ComboDefinition] {
        &self.definitions
    }

    /// Number of memoized results currently held.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Configured cache capacity.
    #[must_use]
    pub fn cache_capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Drop all memoized results. Never affects correctness.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Find every combo available in `cards`, in definition order.
    ///
    /// A combo is available when its missing requirement count does not
    /// exceed the number of wildcard cards present. Duplicates of a
    /// required name count once; wildcards are counted separately and
    /// never matched by name.
    pub fn detect(&mut self, registry: &AbilityRegistry, cards: &[Card]) -> Vec<ComboMatch> {
        let key = multiset_key(registry, cards);
        if let Some(hit) = self.cache.get(&key) {
            log::trace!("combo cache hit for {key}");
            return hit.clone();
        }

        let wildcard_count = cards
            .iter()
            .filter(|c| c.faction == Faction::Wildcard)
            .count();

        let present: FxHashSet<String> = cards
            .iter()
            .filter(|c| c.faction != Faction::Wildcard)
            .map(|c| registry.resolve_name(&c.name))
            .collect();

        let mut matches = Vec::new();
        for def in &self.definitions {
            // Presence by canonical name; duplicate requirements count once.
            let mut matched: Vec<String> = Vec::new();
            let mut seen = FxHashSet::default();
            for required in &def.required_card_names {
                let canonical = registry.resolve_name(required);
                if present.contains(&canonical) && seen.insert(canonical.clone()) {
                    matched.push(canonical);
                }
            }

            let quota = def.quota();
            let missing = quota.saturating_sub(matched.len());
            if missing <= wildcard_count {
                matches.push(ComboMatch {
                    combo_id: def.id,
                    matched_card_names: matched,
                    wildcards_used: missing,
                });
            }
        }

        self.cache.insert(key, matches.clone());
        matches
    }

    /// Pick the single combo that applies to one lane side.
    ///
    /// When the caller supplies an explicit wildcard-to-combo assignment
    /// and that combo is available, it is honored; otherwise the first
    /// available combo in definition order wins. All others are ignored
    /// for this evaluation.
    pub fn active(
        &mut self,
        registry: &AbilityRegistry,
        cards: &[Card],
        assignment: Option<ComboId>,
    ) -> Option<ComboMatch> {
        let matches = self.detect(registry, cards);
        if let Some(chosen) = assignment {
            if let Some(m) = matches.iter().find(|m| m.combo_id == chosen) {
                return Some(m.clone());
            }
        }
        matches.into_iter().next()
    }
}

/// Canonical cache key: sorted `len:resolved:faction` entries.
///
/// The same multiset always yields the same key, so the key fully
/// determines the detection result. The length prefix keeps the key
/// injective even when a resolved name contains the separators.
fn multiset_key(registry: &AbilityRegistry, cards: &[Card]) -> String {
    let mut pairs: Vec<String> = cards
        .iter()
        .map(|c| {
            let resolved = registry.resolve_name(&c.name);
            format!("{}:{}:{:?}", resolved.len(), resolved, c.faction)
        })
        .collect();
    pairs.sort_unstable();
    pairs.join("|")
}
