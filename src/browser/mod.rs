//! Browser automation module
//!
//! This module provides browser control through ChromiumOxide: lifecycle
//! management, URL loading, link following and explicit waits.

pub mod controller;
pub mod navigation;

pub use controller::{BrowserConfig, BrowserConfigBuilder, BrowserController, PageHandle};
pub use navigation::{
    NavigationOptions, NavigationResult, PageNavigator, UrlValidator, READY_STATE_SCRIPT,
};
