//! Content extraction module
//!
//! This module turns page HTML into equipment items.

pub mod tables;

pub use tables::{ColumnLayout, TableExtractor, LEVEL_HEADER, NAME_HEADER};
