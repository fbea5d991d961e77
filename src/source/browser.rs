//! Browser-backed page source

use crate::browser::{BrowserConfig, BrowserController, NavigationOptions, PageHandle, PageNavigator};
use crate::error::{Error, Result};
use crate::source::PageSource;
use tracing::{debug, info, instrument};

/// Page source that drives a real Chromium instance
pub struct BrowserSource {
    controller: BrowserController,
    page: PageHandle,
    options: NavigationOptions,
}

impl BrowserSource {
    /// Launch a browser and open a blank page to drive
    pub async fn launch(config: BrowserConfig, options: NavigationOptions) -> Result<Self> {
        let controller = BrowserController::with_config(config).await?;
        let page = controller.new_page().await?;
        debug!(
            "Driving page with headless={} url_timeout={}ms element_timeout={}ms",
            controller.config().headless,
            options.url_timeout_ms,
            options.element_timeout_ms
        );
        Ok(Self {
            controller,
            page,
            options,
        })
    }

    /// Shut the browser down
    pub async fn close(self) -> Result<()> {
        self.controller.close().await
    }
}

impl PageSource for BrowserSource {
    async fn start(&mut self, url: &str) -> Result<()> {
        let result = PageNavigator::goto(&self.page, url, &self.options).await?;
        info!(
            "Loaded {} ({:?}) in {}ms",
            result.final_url, result.title, result.duration_ms
        );
        Ok(())
    }

    #[instrument(skip(self, expected_links))]
    async fn open(&mut self, link_text: &str, url: &str, expected_links: &[&str]) -> Result<()> {
        PageNavigator::click_link_text(&self.page, link_text).await?;
        PageNavigator::wait_for_url(&self.page, link_text, url, &self.options).await?;
        PageNavigator::wait_for_load(&self.page, &self.options).await?;
        for expected in expected_links {
            PageNavigator::wait_for_link_text(&self.page, expected, &self.options).await?;
        }
        Ok(())
    }

    async fn html(&mut self) -> Result<String> {
        self.page
            .inner()
            .content()
            .await
            .map_err(|e| Error::cdp(e.to_string()))
    }
}
