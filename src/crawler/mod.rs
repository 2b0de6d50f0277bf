//! Crawler module for web page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - The `PageFetcher` seam and its HTTP implementation
//! - HTML parsing for titles and link targets
//! - Depth-bounded, single-site crawl coordination

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{CrawlOutcome, Crawler};
pub use fetcher::{build_http_client, FetchError, FetchedPage, HttpFetcher, PageFetcher};
pub use parser::{parse_html, ParsedPage};
