//! Crawl statistics
//!
//! Counters collected by the crawler while it runs, and a helper that
//! reports them through the logging layer once the pipeline finishes.

use crate::state::PageState;
use std::collections::HashMap;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of URLs claimed in the visited set
    pub pages_visited: u64,

    /// Count of URL outcomes by state
    pub pages_by_state: HashMap<PageState, u64>,

    /// In-scope links recorded across all crawled pages
    pub links_discovered: u64,

    /// Links dropped because they point to another site
    pub external_links_skipped: u64,

    /// Hrefs that could not be resolved into a URL
    pub unresolvable_links: u64,
}

impl CrawlStatistics {
    /// Creates an empty statistics record
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one URL outcome
    pub fn record(&mut self, state: PageState) {
        *self.pages_by_state.entry(state).or_insert(0) += 1;
    }

    /// Number of URLs that ended in `state`
    pub fn count(&self, state: PageState) -> u64 {
        self.pages_by_state.get(&state).copied().unwrap_or(0)
    }

    /// Pages fetched and recorded in the page graph
    pub fn pages_crawled(&self) -> u64 {
        self.count(PageState::Processed)
    }

    /// Pages whose fetch failed
    pub fn pages_failed(&self) -> u64 {
        self.count(PageState::Failed)
    }

    /// Returns the share of fetched pages that succeeded, as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.pages_crawled() + self.pages_failed();
        if attempted == 0 {
            return 0.0;
        }
        (self.pages_crawled() as f64 / attempted as f64) * 100.0
    }
}

/// Logs statistics at info level
///
/// # Arguments
///
/// * `stats` - The statistics to report
/// * `global_links` - Number of links classified as global navigation
pub fn log_statistics(stats: &CrawlStatistics, global_links: usize) {
    tracing::info!(
        "Visited {} URLs: {} crawled, {} failed ({:.1}% success)",
        stats.pages_visited,
        stats.pages_crawled(),
        stats.pages_failed(),
        stats.success_rate()
    );

    for state in PageState::all_states() {
        tracing::debug!("  {}: {}", state, stats.count(state));
    }

    let depth_exceeded = stats.count(PageState::DepthExceeded);
    if depth_exceeded > 0 {
        tracing::info!("Links beyond max depth: {}", depth_exceeded);
    }

    let limit_hit = stats.count(PageState::PageLimitHit);
    if limit_hit > 0 {
        tracing::warn!("Page limit reached; {} URLs left uncrawled", limit_hit);
    }

    tracing::info!(
        "Links: {} internal, {} external skipped, {} unresolvable, {} global navigation",
        stats.links_discovered,
        stats.external_links_skipped,
        stats.unresolvable_links,
        global_links
    );
}
