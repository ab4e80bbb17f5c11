//! Bounded LRU memo cache.
//!
//! Detection is re-run every turn over mostly unchanged lanes, so results
//! are memoized. The key fully determines the value, so eviction can never
//! return stale data - it only costs a recomputation. Capacity is fixed at
//! construction; the cache is owned by its detector, never a process-wide
//! singleton.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

/// Fixed-capacity string-keyed cache with least-recently-used eviction.
#[derive(Clone, Debug)]
pub struct LruCache<V> {
    capacity: usize,
    map: FxHashMap<String, V>,
    /// Keys ordered coldest-first.
    recency: VecDeque<String>,
}

impl<V> LruCache<V> {
    /// Create a cache holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be positive");
        Self {
            capacity,
            map: FxHashMap::default(),
            recency: VecDeque::with_capacity(capacity),
        }
    }

    /// Get a value, refreshing its recency.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        if self.map.contains_key(key) {
            self.touch(key);
            self.map.get(key)
        } else {
            None
        }
    }

    /// Insert a value, evicting the coldest entry when at capacity.
    pub fn insert(&mut self, key: String, value: V) {
        if self.map.insert(key.clone(), value).is_some() {
            self.touch(&key);
            return;
        }
        if self.map.len() > self.capacity {
            if let Some(coldest) = self.recency.pop_front() {
                self.map.remove(&coldest);
            }
        }
        self.recency.push_back(key);
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Configured capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry. Safe at any time - the cache is never a source
    /// of truth.
    pub fn clear(&mut self) {
        self.map.clear();
        self.recency.clear();
    }

    fn touch(&mut self, key: &str) {
        if let Some(pos) = self.recency.iter().position(|k| k == key) {
            self.recency.remove(pos);
            self.recency.push_back(key.to_string());
        }
    }
}
