//! Error types for the equipment randomizer
//!
//! This module provides the error hierarchy used across the browser layer,
//! the page sources, the category walker and the definition loader.

use thiserror::Error;

/// The main error type for randomizer operations
#[derive(Error, Debug)]
pub enum Error {
    /// Browser-related errors
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Navigation errors
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Table extraction errors
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Definition file errors
    #[error("Definition error: {0}")]
    Definition(#[from] DefinitionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// ChromiumOxide errors
    #[error("CDP error: {0}")]
    Cdp(String),
}

/// Browser lifecycle and control errors
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to launch browser
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Browser configuration error
    #[error("Invalid browser configuration: {0}")]
    ConfigError(String),

    /// Failed to create new page/tab
    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),
}

/// Navigation errors
#[derive(Error, Debug)]
pub enum NavigationError {
    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Page load failed
    #[error("Page load failed: {0}")]
    LoadFailed(String),

    /// No link with the given text on the current page
    #[error("Unable to find link {link_text} on page {page_url}")]
    LinkNotFound {
        /// Visible text that was searched for
        link_text: String,
        /// URL of the page that was searched
        page_url: String,
    },

    /// The page never reached the expected URL
    #[error("Clicking the link {link_text} never caused the url to change to {expected} (last seen: {actual})")]
    UrlMismatch {
        /// Link that was followed
        link_text: String,
        /// URL the definition file expects
        expected: String,
        /// URL the page actually ended up on
        actual: String,
    },

    /// A category link expected on the page never appeared
    #[error("Unable to find expected category link {link_text} on page {page_url}")]
    CategoryLinkMissing {
        /// Visible text of the missing category link
        link_text: String,
        /// URL of the page that was searched
        page_url: String,
    },

    /// HTTP error
    #[error("HTTP error {status}: {url}")]
    HttpError {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },
}

/// Table extraction errors
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Invalid selector
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Definition file errors
#[derive(Error, Debug)]
pub enum DefinitionError {
    /// The same key appears twice in one category map
    #[error("Duplicate category key: {0}")]
    DuplicateKey(String),

    /// A category URL is not navigable
    #[error("Category {key} has an invalid url: {reason}")]
    InvalidUrl {
        /// Category key
        key: String,
        /// Why the URL was rejected
        reason: String,
    },
}

/// Result type alias for randomizer operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a CDP error from a string
    pub fn cdp<S: Into<String>>(msg: S) -> Self {
        Error::Cdp(msg.into())
    }
}

/// Convert chromiumoxide errors
impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}
