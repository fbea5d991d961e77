//! Run settings and the collect/filter/sample pipeline

use crate::catalog::{CategoryWalker, Definitions, Selection};
use crate::error::Result;
use crate::items::{self, Item, LevelRange};
use crate::source::PageSource;
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// Settings for one randomizer run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Explicitly selected category keys; empty means every category
    pub categories: BTreeSet<String>,
    /// Accepted item levels
    pub level_range: LevelRange,
    /// How many items to pick
    pub number_of_items: usize,
    /// Seed for the shuffle
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            level_range: LevelRange::default(),
            number_of_items: 10,
            seed: 0,
        }
    }
}

/// Collects items from the site and draws a random sample of them
pub struct EquipmentRandomizer {
    definitions: Definitions,
    settings: Settings,
    selection: Selection,
}

impl EquipmentRandomizer {
    /// Create a randomizer, resolving the selected categories against the tree
    pub fn new(definitions: Definitions, settings: Settings) -> Self {
        let selection = Selection::resolve(&definitions.equipment_page, &settings.categories);
        Self {
            definitions,
            settings,
            selection,
        }
    }

    /// Walk the active categories and keep the items inside the level range
    #[instrument(skip(self, source))]
    pub async fn collect<S: PageSource>(&self, source: &mut S) -> Result<Vec<Item>> {
        let walker = CategoryWalker::new(&self.definitions, &self.selection);
        let found = walker.walk(source).await?;
        let total = found.len();
        let pool = self.settings.level_range.filter(found);
        info!(
            "{} of {} items within levels {}-{}",
            pool.len(),
            total,
            self.settings.level_range.lowest(),
            self.settings.level_range.highest()
        );
        Ok(pool)
    }

    /// Draw the configured number of items from `pool`
    pub fn select(&self, pool: Vec<Item>) -> Vec<Item> {
        items::sample(pool, self.settings.number_of_items, self.settings.seed)
    }

    /// Collect and select in one step
    pub async fn run<S: PageSource>(&self, source: &mut S) -> Result<Vec<Item>> {
        let pool = self.collect(source).await?;
        Ok(self.select(pool))
    }
}
