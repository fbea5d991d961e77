//! Equipment Randomizer CLI
//!
//! Prints a random sampling of Starfinder equipment scraped from the rules
//! reference.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use equipment_randomizer::browser::{BrowserConfig, NavigationOptions};
use equipment_randomizer::catalog::{Definitions, DEFAULT_DEFINITIONS_PATH};
use equipment_randomizer::items::LevelRange;
use equipment_randomizer::randomizer::{EquipmentRandomizer, Settings};
use equipment_randomizer::source::{BrowserSource, HttpSource};
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// How pages are fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Driver {
    /// Headless Chromium over CDP
    Browser,
    /// Plain HTTP requests, following link hrefs
    Http,
}

/// Get a random sampling of Starfinder items
#[derive(Parser, Debug)]
#[command(name = "equip-rand")]
#[command(version)]
#[command(about = "Get a random sampling of Starfinder items")]
struct Args {
    /// Select from light armor, heavy armor, and armor upgrades.
    #[arg(long)]
    armor: bool,

    /// Select from light armor.
    #[arg(long)]
    light_armor: bool,

    /// Select from heavy armor.
    #[arg(long)]
    heavy_armor: bool,

    /// Select from armor upgrades.
    #[arg(long)]
    armor_upgrades: bool,

    /// Select from all weapon types, ammo, and accessories.
    #[arg(long)]
    weapons: bool,

    /// Select from advanced melee weapons.
    #[arg(long)]
    advanced_melee: bool,

    /// Select from ammunition.
    #[arg(long)]
    ammunition: bool,

    /// Select from basic melee weapons.
    #[arg(long)]
    basic_melee: bool,

    /// Select from grenades.
    #[arg(long)]
    grenade: bool,

    /// Select from heavy weapons.
    #[arg(long = "heavy-weapon")]
    heavy: bool,

    /// Select from longarm weapons.
    #[arg(long)]
    longarms: bool,

    /// Select from small arm weapons.
    #[arg(long)]
    small_arms: bool,

    /// Select from sniper weapons.
    #[arg(long)]
    sniper: bool,

    /// Select from solarian weapon crystals.
    #[arg(long)]
    solarian: bool,

    /// Select from special weapons.
    #[arg(long)]
    special: bool,

    /// Select from weapon accessories.
    #[arg(long)]
    weapon_accessories: bool,

    /// Select a category by its key in the definition file (repeatable)
    #[arg(long = "category", value_name = "KEY")]
    categories: Vec<String>,

    /// Number of items to select.
    #[arg(short = 'n', long, default_value_t = 10)]
    number_of_items: usize,

    /// Lowest level of item to select from.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    lowest_level: i32,

    /// Highest level of item to select from.
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    highest_level: i32,

    /// Seed for the random number generator (default: current time)
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Enables debug messaging.
    #[arg(short, long)]
    debug: bool,

    /// Path to the category definition file
    #[arg(long, default_value = DEFAULT_DEFINITIONS_PATH)]
    definitions: PathBuf,

    /// How to fetch pages
    #[arg(long, value_enum, default_value_t = Driver::Browser)]
    driver: Driver,

    /// Path to Chrome/Chromium executable
    #[arg(long)]
    chrome_path: Option<String>,

    /// Show the browser window
    #[arg(long)]
    headful: bool,

    /// Disable the Chromium sandbox (needed in some containers)
    #[arg(long)]
    no_sandbox: bool,

    /// Print the category tree and exit
    #[arg(long)]
    list_categories: bool,
}

impl Args {
    fn selected_categories(&self) -> BTreeSet<String> {
        let flags = [
            (self.armor, "armor"),
            (self.light_armor, "light_armor"),
            (self.heavy_armor, "heavy_armor"),
            (self.armor_upgrades, "armor_upgrades"),
            (self.weapons, "weapons"),
            (self.advanced_melee, "advanced_melee"),
            (self.ammunition, "ammunition"),
            (self.basic_melee, "basic_melee"),
            (self.grenade, "grenade"),
            (self.heavy, "heavy"),
            (self.longarms, "longarms"),
            (self.small_arms, "small_arms"),
            (self.sniper, "sniper"),
            (self.solarian, "solarian"),
            (self.special, "special"),
            (self.weapon_accessories, "weapon_accessories"),
        ];

        flags
            .iter()
            .filter(|(on, _)| *on)
            .map(|(_, key)| key.to_string())
            .chain(self.categories.iter().cloned())
            .collect()
    }

    fn settings(&self) -> Settings {
        Settings {
            categories: self.selected_categories(),
            level_range: LevelRange::new(self.lowest_level, self.highest_level),
            number_of_items: self.number_of_items,
            // Bit-cast, so every i64 seed maps to a distinct u64
            seed: self
                .seed
                .unwrap_or_else(|| chrono::Utc::now().timestamp()) as u64,
        }
    }

    fn browser_config(&self) -> BrowserConfig {
        let mut builder = BrowserConfig::builder()
            .headless(!self.headful)
            .sandbox(!self.no_sandbox);
        if let Some(ref path) = self.chrome_path {
            builder = builder.chrome_path(path.clone());
        }
        builder.build()
    }
}

fn init_tracing(debug: bool) {
    let default = if debug {
        "equipment_randomizer=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let definitions = Definitions::load(&args.definitions).with_context(|| {
        format!(
            "failed to load definitions from {}",
            args.definitions.display()
        )
    })?;

    if args.list_categories {
        print!("{}", definitions.outline());
        return Ok(());
    }

    let settings = args.settings();
    println!("Random seed: {}", settings.seed as i64);

    let randomizer = EquipmentRandomizer::new(definitions, settings);
    let options = NavigationOptions::default();

    let pool = match args.driver {
        Driver::Browser => {
            let mut source = BrowserSource::launch(args.browser_config(), options)
                .await
                .context("failed to start browser")?;
            let result = randomizer.collect(&mut source).await;
            if let Err(e) = source.close().await {
                warn!("Browser did not close cleanly: {}", e);
            }
            result.context("failed to collect equipment")?
        }
        Driver::Http => {
            let mut source = HttpSource::new(options.timeout_ms)?;
            randomizer
                .collect(&mut source)
                .await
                .context("failed to collect equipment")?
        }
    };

    let selected = randomizer.select(pool);
    println!("Selected items ({}):", selected.len());
    for item in &selected {
        println!("{}", item);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_selects_nothing_explicitly() {
        let args = Args::parse_from(["equip-rand"]);
        assert!(args.selected_categories().is_empty());
        assert_eq!(args.number_of_items, 10);
        assert_eq!(args.driver, Driver::Browser);
    }

    #[test]
    fn test_heavy_weapon_flag_maps_to_heavy_key() {
        let args = Args::parse_from(["equip-rand", "--heavy-weapon", "--category", "starship"]);
        let keys: Vec<String> = args.selected_categories().into_iter().collect();
        assert_eq!(keys, vec!["heavy".to_string(), "starship".to_string()]);
    }

    #[test]
    fn test_settings_clamp_levels() {
        let args = Args::parse_from([
            "equip-rand",
            "--lowest-level",
            "-4",
            "--highest-level",
            "30",
            "--seed",
            "7",
        ]);
        let settings = args.settings();
        assert_eq!(settings.level_range, LevelRange::new(1, 20));
        assert_eq!(settings.seed, 7);
    }

    #[test]
    fn test_negative_seed_accepted() {
        let negative = Args::parse_from(["equip-rand", "--seed", "-5"]).settings();
        let positive = Args::parse_from(["equip-rand", "--seed", "5"]).settings();
        assert_eq!(negative.seed, (-5i64) as u64);
        assert_eq!(negative.seed as i64, -5);
        assert_ne!(negative.seed, positive.seed);
    }

    #[test]
    fn test_browser_config_flags() {
        let args = Args::parse_from(["equip-rand", "--headful", "--no-sandbox"]);
        let config = args.browser_config();
        assert!(!config.headless);
        assert!(!config.sandbox);
    }
}
