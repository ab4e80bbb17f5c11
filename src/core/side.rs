//! Side identification and per-side data storage.
//!
//! A match always has exactly two sides. `SideMap` stores one value per
//! side with O(1) access and supports indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// Both sides, in canonical order.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];

    /// Get the raw side index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }

    /// Get the opposing side.
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use laneclash::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::with_value(0);
/// scores[Side::Player] += 1;
/// assert_eq!(scores[Side::Player], 1);
/// assert_eq!(scores[Side::Opponent], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Opponent)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over `(side, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::BOTH.iter().map(move |&s| (s, self.get(s)))
    }
}

impl<T: Default> Default for SideMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_index() {
        assert_eq!(Side::Player.index(), 0);
        assert_eq!(Side::Opponent.index(), 1);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Player.opposite(), Side::Opponent);
        assert_eq!(Side::Opponent.opposite(), Side::Player);
        assert_eq!(Side::Player.opposite().opposite(), Side::Player);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(format!("{}", Side::Player), "player");
        assert_eq!(format!("{}", Side::Opponent), "opponent");
    }

    #[test]
    fn test_side_map_indexing() {
        let mut map = SideMap::with_value(10);
        map[Side::Opponent] = 20;

        assert_eq!(map[Side::Player], 10);
        assert_eq!(map[Side::Opponent], 20);
    }

    #[test]
    fn test_side_map_factory() {
        let map = SideMap::new(|s| s.index() * 5);
        assert_eq!(map[Side::Player], 0);
        assert_eq!(map[Side::Opponent], 5);
    }

    #[test]
    fn test_side_map_iter() {
        let map = SideMap::new(|s| s.index());
        let pairs: Vec<_> = map.iter().collect();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], (Side::Player, &0));
        assert_eq!(pairs[1], (Side::Opponent, &1));
    }

    #[test]
    fn test_side_map_serde() {
        let map = SideMap::with_value(3u32);
        let json = serde_json::to_string(&map).unwrap();
        let back: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
