//! Equipment items, level filtering and seeded sampling

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest item level the rules allow
pub const MIN_LEVEL: i32 = 1;

/// Highest item level the rules allow
pub const MAX_LEVEL: i32 = 20;

/// A named, leveled piece of equipment scraped from a table row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Item name as shown in the table
    pub name: String,
    /// Item level
    pub level: i32,
}

impl Item {
    /// Create a new item
    pub fn new<S: Into<String>>(name: S, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Lvl {})", self.name, self.level)
    }
}

/// Inclusive level bounds, clamped to the rules' level range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    lowest: i32,
    highest: i32,
}

impl Default for LevelRange {
    fn default() -> Self {
        Self {
            lowest: MIN_LEVEL,
            highest: MAX_LEVEL,
        }
    }
}

impl LevelRange {
    /// Build a range, clamping in order: lowest up to 1, highest down to 20,
    /// then lowest down to highest.
    pub fn new(lowest: i32, highest: i32) -> Self {
        let mut lowest = lowest.max(MIN_LEVEL);
        let highest = highest.min(MAX_LEVEL);
        if lowest > highest {
            lowest = highest;
        }
        Self { lowest, highest }
    }

    /// Lower bound (inclusive)
    pub fn lowest(&self) -> i32 {
        self.lowest
    }

    /// Upper bound (inclusive)
    pub fn highest(&self) -> i32 {
        self.highest
    }

    /// Whether `level` falls inside the range
    pub fn contains(&self, level: i32) -> bool {
        self.lowest <= level && level <= self.highest
    }

    /// Keep only the items whose level falls inside the range
    pub fn filter(&self, items: Vec<Item>) -> Vec<Item> {
        items
            .into_iter()
            .filter(|item| self.contains(item.level))
            .collect()
    }
}

/// Shuffle `items` with a generator seeded from `seed` and keep the first
/// `count`. Asking for at least as many items as exist returns them all.
pub fn sample(mut items: Vec<Item>, count: usize, seed: u64) -> Vec<Item> {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
    items.truncate(count);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Item> {
        (1..=20).map(|lvl| Item::new(format!("item{}", lvl), lvl)).collect()
    }

    #[test]
    fn test_item_display() {
        assert_eq!(Item::new("Second skin", 1).to_string(), "Second skin (Lvl 1)");
    }

    #[test]
    fn test_range_clamps_low_bound() {
        let range = LevelRange::new(-3, 10);
        assert_eq!(range.lowest(), 1);
        assert_eq!(range.highest(), 10);
    }

    #[test]
    fn test_range_clamps_high_bound() {
        assert_eq!(LevelRange::new(5, 99).highest(), 20);
    }

    #[test]
    fn test_range_inverted_bounds_collapse() {
        let range = LevelRange::new(15, 7);
        assert_eq!(range.lowest(), 7);
        assert_eq!(range.highest(), 7);
    }

    #[test]
    fn test_range_is_inclusive() {
        let range = LevelRange::new(3, 5);
        let kept = range.filter(pool());
        let levels: Vec<i32> = kept.iter().map(|i| i.level).collect();
        assert_eq!(levels, vec![3, 4, 5]);
    }

    #[test]
    fn test_sample_smaller_than_pool() {
        let picked = sample(pool(), 5, 42);
        assert_eq!(picked.len(), 5);
    }

    #[test]
    fn test_sample_larger_than_pool_returns_all() {
        let mut picked = sample(pool(), 50, 42);
        picked.sort_by_key(|i| i.level);
        assert_eq!(picked, pool());
    }

    #[test]
    fn test_sample_is_deterministic() {
        assert_eq!(sample(pool(), 7, 1234), sample(pool(), 7, 1234));
    }

    #[test]
    fn test_sample_empty_pool() {
        assert!(sample(Vec::new(), 10, 0).is_empty());
    }
}
