//! Category catalog module
//!
//! This module loads the category definition file, decides which
//! categories are active, and walks the active part of the tree.

pub mod definitions;
pub mod selection;
pub mod walker;

pub use definitions::{
    CategoryNode, Definitions, MainPage, DEFAULT_DEFINITIONS_PATH, EQUIPMENT_PAGE_KEY,
};
pub use selection::Selection;
pub use walker::CategoryWalker;
