//! Crawl → filter → build pipeline
//!
//! `FlowMapper` runs the three stages in order. Each stage is a pure
//! transformation of the previous stage's output; the crawl stage is exposed
//! separately so callers can report progress between stages.

use crate::config::Config;
use crate::crawler::{CrawlOutcome, Crawler, HttpFetcher, PageFetcher};
use crate::graph::{build_flow_graph, remove_links, FlowGraph, LinkFrequencyTable};
use crate::output::CrawlStatistics;
use crate::FlowMapError;

/// Result of a full pipeline run
#[derive(Debug, Clone)]
pub struct FlowReport {
    /// The seed URL after normalization
    pub seed: String,

    /// The final node/edge graph
    pub flow: FlowGraph,

    /// Links classified as global navigation, in first-seen order
    pub global_links: Vec<String>,

    /// Number of URLs claimed during the crawl (fetched successfully or not)
    pub pages_visited: usize,

    pub statistics: CrawlStatistics,
}

/// Maps user flows through a site
pub struct FlowMapper<F> {
    crawler: Crawler<F>,
    max_depth: u32,
    threshold: f64,
}

impl FlowMapper<HttpFetcher> {
    /// Creates a mapper that fetches pages over HTTP
    pub fn from_config(config: &Config) -> Result<Self, FlowMapError> {
        let fetcher = HttpFetcher::new(&config.crawler, &config.user_agent)?;
        Ok(Self::new(fetcher, config))
    }
}

impl<F: PageFetcher> FlowMapper<F> {
    /// Creates a mapper around any page fetcher
    pub fn new(fetcher: F, config: &Config) -> Self {
        Self {
            crawler: Crawler::new(fetcher, config.crawler.clone()),
            max_depth: config.crawler.max_depth,
            threshold: config.filter.threshold,
        }
    }

    /// Returns the underlying crawler
    pub fn crawler(&self) -> &Crawler<F> {
        &self.crawler
    }

    /// Runs the crawl stage only
    pub async fn crawl(&self, seed: &str) -> Result<CrawlOutcome, FlowMapError> {
        self.crawler.crawl(seed, self.max_depth).await
    }

    /// Runs the filter and build stages on a finished crawl
    pub fn finish(&self, outcome: CrawlOutcome) -> FlowReport {
        let global_links = LinkFrequencyTable::from_graph(&outcome.graph).global_links(self.threshold);
        for link in &global_links {
            tracing::info!("Global navigation link: {}", link);
        }

        let cleaned = remove_links(&outcome.graph, &global_links);
        let flow = build_flow_graph(&cleaned);

        tracing::debug!(
            "Flow graph has {} nodes and {} edges",
            flow.nodes.len(),
            flow.edges.len()
        );

        FlowReport {
            seed: outcome.seed,
            flow,
            global_links,
            pages_visited: outcome.visited.len(),
            statistics: outcome.statistics,
        }
    }

    /// Runs the full pipeline
    ///
    /// # Arguments
    ///
    /// * `seed` - The start URL
    ///
    /// # Returns
    ///
    /// * `Ok(FlowReport)` - The flow graph and run statistics
    /// * `Err(FlowMapError)` - The seed URL is unusable
    pub async fn run(&self, seed: &str) -> Result<FlowReport, FlowMapError> {
        let outcome = self.crawl(seed).await?;
        Ok(self.finish(outcome))
    }
}
