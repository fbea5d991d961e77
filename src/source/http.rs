//! HTTP-backed page source
//!
//! Follows links by reading `href` attributes out of the fetched markup
//! instead of clicking them, so no browser is needed. Only works for pages
//! whose links and tables are present without running scripts.

use crate::browser::UrlValidator;
use crate::error::{NavigationError, Result};
use crate::source::PageSource;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Page source that fetches pages with a plain HTTP client
pub struct HttpSource {
    client: Client,
    current_url: Option<Url>,
    document: String,
}

impl HttpSource {
    /// Create a source whose requests time out after `timeout_ms`
    pub fn new(timeout_ms: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client))
    }

    /// Create a source around an already configured client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            current_url: None,
            document: String::new(),
        }
    }

    async fn fetch(&mut self, url: Url) -> Result<()> {
        debug!("Fetching {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NavigationError::HttpError {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }

        self.current_url = Some(response.url().clone());
        self.document = response.text().await?;
        Ok(())
    }

    fn page_url(&self) -> String {
        self.current_url
            .as_ref()
            .map(Url::to_string)
            .unwrap_or_default()
    }
}

impl PageSource for HttpSource {
    async fn start(&mut self, url: &str) -> Result<()> {
        UrlValidator::validate(url).map_err(NavigationError::InvalidUrl)?;
        let parsed = Url::parse(url).map_err(|e| NavigationError::InvalidUrl(e.to_string()))?;
        self.fetch(parsed).await
    }

    #[instrument(skip(self, expected_links))]
    async fn open(&mut self, link_text: &str, url: &str, expected_links: &[&str]) -> Result<()> {
        let href = find_link_href(&self.document, link_text).ok_or_else(|| {
            NavigationError::LinkNotFound {
                link_text: link_text.to_string(),
                page_url: self.page_url(),
            }
        })?;

        let target = match &self.current_url {
            Some(base) => base.join(&href),
            None => Url::parse(&href),
        }
        .map_err(|e| NavigationError::InvalidUrl(format!("{}: {}", href, e)))?;

        self.fetch(target).await?;

        let landed = self.page_url();
        if !UrlValidator::urls_match(&landed, url) {
            return Err(NavigationError::UrlMismatch {
                link_text: link_text.to_string(),
                expected: url.to_string(),
                actual: landed,
            }
            .into());
        }

        for expected in expected_links {
            if find_link_href(&self.document, expected).is_none() {
                return Err(NavigationError::CategoryLinkMissing {
                    link_text: expected.to_string(),
                    page_url: landed,
                }
                .into());
            }
        }

        Ok(())
    }

    async fn html(&mut self) -> Result<String> {
        Ok(self.document.clone())
    }
}

/// `href` of the first anchor whose visible text equals `link_text`
pub fn find_link_href(html: &str, link_text: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a[href]").ok()?;

    document
        .select(&anchors)
        .find(|a| {
            a.text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
                == link_text
        })
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
}
