//! Page fetching
//!
//! This module defines the seam between the crawler and the network:
//! - The `PageFetcher` trait the crawler drives
//! - `HttpFetcher`, the reqwest-backed implementation used by the CLI
//! - Error classification for failed fetches

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::crawler::parser::{parse_html, ParsedPage};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// A successfully fetched page, before link resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    /// The declared page title, trimmed; None if absent or blank
    pub title: Option<String>,

    /// Raw href values in document order, unresolved
    pub hrefs: Vec<String>,
}

impl From<ParsedPage> for FetchedPage {
    fn from(parsed: ParsedPage) -> Self {
        Self {
            title: parsed.title,
            hrefs: parsed.hrefs,
        }
    }
}

/// Why a page could not be fetched
///
/// The crawler treats every variant the same way: log, skip the page, continue.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP status {status}")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Network(String),
}

/// Retrieves a page's title and outgoing hrefs
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url`, returning its title and raw hrefs or the reason it failed
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `user_agent` - The user agent configuration
/// * `timeout` - Total time allowed for a single request
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    timeout: Duration,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches pages over HTTP and parses them as HTML
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher from crawler and user agent settings
    pub fn new(crawler: &CrawlerConfig, user_agent: &UserAgentConfig) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(crawler.fetch_timeout_secs);
        Ok(Self::with_client(build_http_client(user_agent, timeout)?))
    }

    /// Wraps an already configured client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let response = self.client.get(url).send().await.map_err(classify_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(classify_error)?;

        Ok(parse_html(&body).into())
    }
}

/// Maps a reqwest error onto the fetch error taxonomy
fn classify_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if let Some(status) = error.status() {
        FetchError::Status {
            status: status.as_u16(),
        }
    } else {
        FetchError::Network(error.to_string())
    }
}
