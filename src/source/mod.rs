//! Page sources
//!
//! A page source is whatever drives the site: a real browser over CDP, or a
//! plain HTTP client reading the static markup. The category walker only
//! needs the three operations of [`PageSource`].

pub mod browser;
pub mod http;

pub use browser::BrowserSource;
pub use http::HttpSource;

use crate::error::Result;

/// Driver for moving through the reference site one page at a time
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Load the entry page directly by URL
    async fn start(&mut self, url: &str) -> Result<()>;

    /// Follow the link labelled `link_text` on the current page, confirm the
    /// page is now `url`, and confirm every entry of `expected_links` is
    /// present as a link.
    async fn open(&mut self, link_text: &str, url: &str, expected_links: &[&str]) -> Result<()>;

    /// HTML of the current page
    async fn html(&mut self) -> Result<String>;
}
