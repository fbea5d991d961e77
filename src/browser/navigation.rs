//! Page navigation functionality
//!
//! This module handles loading a URL, following links by their visible text,
//! and the explicit waits that confirm each navigation landed where the
//! category definitions say it should.

use crate::browser::PageHandle;
use crate::error::{Error, NavigationError, Result};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Options for page navigation
#[derive(Debug, Clone)]
pub struct NavigationOptions {
    /// Timeout for the initial page load in milliseconds (default: 30000)
    pub timeout_ms: u64,
    /// How long a clicked link may take to change the URL (default: 10000)
    pub url_timeout_ms: u64,
    /// How long an expected link may take to appear (default: 5000)
    pub element_timeout_ms: u64,
    /// Delay between condition checks in milliseconds (default: 100)
    pub poll_interval_ms: u64,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            url_timeout_ms: 10000,
            element_timeout_ms: 5000,
            poll_interval_ms: 100,
        }
    }
}

/// Resolves once the document has fired its load event
pub const READY_STATE_SCRIPT: &str = r#"
    new Promise(resolve => {
        if (document.readyState === 'complete') {
            resolve(true);
        } else {
            window.addEventListener('load', () => resolve(true));
        }
    })
"#;

/// Result of a navigation operation
#[derive(Debug)]
pub struct NavigationResult {
    /// Final URL after any redirects
    pub final_url: String,
    /// Page title
    pub title: Option<String>,
    /// Navigation duration in milliseconds
    pub duration_ms: u64,
}

/// URL validation utilities
pub struct UrlValidator;

impl UrlValidator {
    /// Validate a URL for navigation
    pub fn validate(url: &str) -> std::result::Result<(), String> {
        if url.is_empty() {
            return Err("URL cannot be empty".to_string());
        }

        if !url.starts_with("http://")
            && !url.starts_with("https://")
            && !url.starts_with("file://")
        {
            return Err(format!(
                "URL must start with http://, https://, or file://: {}",
                url
            ));
        }

        if url.len() > 2048 {
            return Err("URL exceeds maximum length of 2048 characters".to_string());
        }

        url::Url::parse(url).map_err(|e| format!("URL does not parse: {}", e))?;

        Ok(())
    }

    /// Compare two URLs after normalization (host case, default port, empty path)
    pub fn urls_match(a: &str, b: &str) -> bool {
        match (url::Url::parse(a), url::Url::parse(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => a == b,
        }
    }
}

/// Page navigator with link-following and explicit waits
pub struct PageNavigator;

impl PageNavigator {
    /// Navigate to a URL
    #[instrument(skip(page, options))]
    pub async fn goto(
        page: &PageHandle,
        url: &str,
        options: &NavigationOptions,
    ) -> Result<NavigationResult> {
        let start = Instant::now();

        UrlValidator::validate(url).map_err(NavigationError::InvalidUrl)?;

        info!("Navigating to: {}", url);

        let timeout = Duration::from_millis(options.timeout_ms);
        tokio::time::timeout(timeout, page.page.goto(url))
            .await
            .map_err(|_| NavigationError::LoadFailed(format!("timed out loading {}", url)))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        Self::wait_for_ready(&page.page, Duration::from_millis(options.timeout_ms)).await?;

        let final_url = page
            .page
            .url()
            .await
            .map_err(|e| Error::cdp(e.to_string()))?
            .unwrap_or_else(|| url.to_string());

        let title = page
            .page
            .evaluate("document.title")
            .await
            .ok()
            .and_then(|v| v.into_value::<String>().ok());

        page.set_url(final_url.clone()).await;
        debug!("Navigation complete: {} -> {}", url, final_url);

        Ok(NavigationResult {
            final_url,
            title,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn wait_for_ready(page: &chromiumoxide::Page, timeout: Duration) -> Result<()> {
        tokio::time::timeout(timeout, page.evaluate(READY_STATE_SCRIPT))
            .await
            .map_err(|_| NavigationError::LoadFailed("page never became ready".to_string()))?
            .map_err(|e| Error::cdp(e.to_string()))?;

        Ok(())
    }

    /// Wait for a clicked link's document to finish loading
    ///
    /// The URL changes as soon as the new document commits, so this runs after
    /// [`PageNavigator::wait_for_url`] and before anything reads the DOM. It is
    /// bounded by the URL timeout.
    #[instrument(skip(page, options))]
    pub async fn wait_for_load(page: &PageHandle, options: &NavigationOptions) -> Result<()> {
        let timeout = Duration::from_millis(options.url_timeout_ms);
        let start = Instant::now();
        let url = page.url().await;

        tokio::time::timeout(timeout, page.page.wait_for_navigation())
            .await
            .map_err(|_| NavigationError::LoadFailed(format!("{} did not finish loading", url)))?
            .map_err(|e| NavigationError::LoadFailed(e.to_string()))?;

        Self::wait_for_ready(&page.page, timeout.saturating_sub(start.elapsed())).await?;
        debug!("Page loaded in {}ms", start.elapsed().as_millis());
        Ok(())
    }

    /// Click the first anchor whose visible text equals `link_text`
    #[instrument(skip(page))]
    pub async fn click_link_text(page: &PageHandle, link_text: &str) -> Result<()> {
        debug!("Clicking link {}", link_text);

        let anchors = page.page.find_elements("a").await?;
        for anchor in anchors {
            let text = anchor.inner_text().await?.unwrap_or_default();
            if text.trim() == link_text {
                anchor.click().await?;
                return Ok(());
            }
        }

        Err(NavigationError::LinkNotFound {
            link_text: link_text.to_string(),
            page_url: Self::current_url(page).await,
        }
        .into())
    }

    /// Wait until the page URL equals `expected`
    #[instrument(skip(page, options))]
    pub async fn wait_for_url(
        page: &PageHandle,
        link_text: &str,
        expected: &str,
        options: &NavigationOptions,
    ) -> Result<()> {
        debug!("Checking to make sure the url changed to {}", expected);

        let timeout = Duration::from_millis(options.url_timeout_ms);
        let poll = Duration::from_millis(options.poll_interval_ms);
        let start = Instant::now();

        loop {
            let current = Self::current_url(page).await;
            if UrlValidator::urls_match(&current, expected) {
                page.set_url(current).await;
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(NavigationError::UrlMismatch {
                    link_text: link_text.to_string(),
                    expected: expected.to_string(),
                    actual: current,
                }
                .into());
            }
            tokio::time::sleep(poll).await;
        }
    }

    /// Wait until an anchor with visible text `link_text` is present
    #[instrument(skip(page, options))]
    pub async fn wait_for_link_text(
        page: &PageHandle,
        link_text: &str,
        options: &NavigationOptions,
    ) -> Result<()> {
        debug!("Checking for link {}", link_text);

        let script = Self::link_presence_script(link_text)?;
        let timeout = Duration::from_millis(options.element_timeout_ms);
        let poll = Duration::from_millis(options.poll_interval_ms);
        let start = Instant::now();

        loop {
            // An evaluate can fail while the previous document is torn down
            let present = match page.page.evaluate(script.as_str()).await {
                Ok(value) => value.into_value::<bool>().unwrap_or(false),
                Err(e) => {
                    debug!("Link check failed, retrying: {}", e);
                    false
                }
            };

            if present {
                debug!("Link {} found", link_text);
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(NavigationError::CategoryLinkMissing {
                    link_text: link_text.to_string(),
                    page_url: Self::current_url(page).await,
                }
                .into());
            }
            tokio::time::sleep(poll).await;
        }
    }

    /// JavaScript predicate that is true when a link with this exact text exists
    pub fn link_presence_script(link_text: &str) -> Result<String> {
        let literal = serde_json::to_string(link_text)?;
        Ok(format!(
            "Array.from(document.querySelectorAll('a')).some(a => a.innerText.trim() === {})",
            literal
        ))
    }

    async fn current_url(page: &PageHandle) -> String {
        match page.page.url().await {
            Ok(Some(url)) => url,
            _ => page.url().await,
        }
    }
}
