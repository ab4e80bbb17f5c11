//! Combo system: definitions, detection, and the bounded memo cache.
//!
//! ## Key Types
//!
//! - `ComboDefinition`: required names + quota + bonus, in tie-break order
//! - `ComboDetector`: multiset matching with wildcard substitution
//! - `LruCache`: bounded memoization keyed by the canonical card multiset
//!
//! At most one combo applies per lane per evaluation; without an explicit
//! wildcard assignment the first available definition wins.

pub mod cache;
pub mod definition;
pub mod detector;

pub use cache::LruCache;
pub use definition::{BonusKind, BonusScope, ComboBonus, ComboDefinition, ComboId};
pub use detector::{ComboDetector, ComboMatch, DEFAULT_CACHE_CAPACITY};
