//! Equipment Randomizer - random equipment picks from the Starfinder SRD
//!
//! This crate drives the Archives of Nethys rules reference through a
//! headless browser, collects equipment from the item tables of the
//! categories you ask for, filters it by level, and draws a seeded sample.
//!
//! # Architecture
//!
//! ```text
//! CLI ──▶ Settings ──▶ Selection ──▶ CategoryWalker ──▶ PageSource
//!                                         │               ├─ BrowserSource (CDP)
//!                                         ▼               └─ HttpSource
//!                                   TableExtractor
//!                                         │
//!                                         ▼
//!                              LevelRange ──▶ sample ──▶ stdout
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use equipment_randomizer::browser::{BrowserConfig, NavigationOptions};
//! use equipment_randomizer::catalog::Definitions;
//! use equipment_randomizer::randomizer::{EquipmentRandomizer, Settings};
//! use equipment_randomizer::source::BrowserSource;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let definitions = Definitions::load(Path::new("config/equipment_definitions.json"))?;
//!     let randomizer = EquipmentRandomizer::new(definitions, Settings::default());
//!
//!     let mut source =
//!         BrowserSource::launch(BrowserConfig::default(), NavigationOptions::default()).await?;
//!     let picked = randomizer.run(&mut source).await;
//!     source.close().await?;
//!
//!     for item in picked? {
//!         println!("{}", item);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod browser;
pub mod catalog;
pub mod error;
pub mod extraction;
pub mod items;
pub mod randomizer;
pub mod source;

// Re-exports for convenience
pub use browser::BrowserController;
pub use catalog::{CategoryNode, CategoryWalker, Definitions, Selection};
pub use error::{Error, Result};
pub use extraction::TableExtractor;
pub use items::{Item, LevelRange};
pub use randomizer::{EquipmentRandomizer, Settings};
pub use source::{BrowserSource, HttpSource, PageSource};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
