//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates:
//! - Depth bookkeeping and the visited set
//! - Fetching pages through a `PageFetcher`
//! - Resolving, scoping and deduplicating discovered links
//! - Building the page graph handed to the filtering stage

use crate::config::CrawlerConfig;
use crate::crawler::fetcher::{FetchError, FetchedPage, PageFetcher};
use crate::graph::{PageGraph, PageGraphBuilder, PageRecord};
use crate::output::CrawlStatistics;
use crate::state::{PageState, VisitedSet};
use crate::url::{normalize_url, resolve_link, SiteScope};
use crate::{FlowMapError, UrlError};
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use url::Url;

/// Everything a finished crawl produced
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    /// The seed URL after normalization
    pub seed: String,

    /// Frozen page graph, in crawl order
    pub graph: PageGraph,

    /// Every URL claimed during the run, fetched successfully or not
    pub visited: VisitedSet,

    pub statistics: CrawlStatistics,
}

/// Depth-bounded, single-site crawler
pub struct Crawler<F> {
    fetcher: F,
    config: CrawlerConfig,
}

impl<F: PageFetcher> Crawler<F> {
    /// Creates a new crawler
    ///
    /// # Arguments
    ///
    /// * `fetcher` - Collaborator that retrieves pages
    /// * `config` - Concurrency and page limit settings; the depth is given per crawl
    pub fn new(fetcher: F, config: CrawlerConfig) -> Self {
        Self { fetcher, config }
    }

    /// Returns the fetcher driving this crawler
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Crawls the seed's site up to `max_depth` links away from the seed
    ///
    /// With a concurrency of 1 the traversal is depth-first in page order. With
    /// more, pages are fetched in breadth-first waves and results are applied in
    /// wave order, so the output is deterministic either way.
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOutcome)` - The crawl ran; individual fetch failures are logged, not returned
    /// * `Err(FlowMapError)` - The seed URL is unusable
    pub async fn crawl(&self, seed: &str, max_depth: u32) -> Result<CrawlOutcome, FlowMapError> {
        let seed = normalize_url(seed)?;
        let scope = SiteScope::from_seed(&seed).ok_or(UrlError::MissingHost)?;

        tracing::info!(
            "Crawling {} (max depth {}, concurrency {})",
            seed,
            max_depth,
            self.config.concurrency
        );

        let mut run = CrawlRun::new(scope, max_depth, self.config.max_pages);

        if self.config.concurrency > 1 {
            self.crawl_breadth_first(&mut run, seed.clone()).await;
        } else {
            self.crawl_depth_first(&mut run, seed.clone()).await;
        }

        let outcome = run.finish(seed.to_string());
        tracing::info!(
            "Crawl finished: {} pages recorded, {} URLs visited",
            outcome.graph.len(),
            outcome.visited.len()
        );

        Ok(outcome)
    }

    /// Explicit-stack depth-first traversal
    ///
    /// Children are pushed in reverse so they pop in page order; this visits
    /// pages in the same order as a recursive walk.
    async fn crawl_depth_first(&self, run: &mut CrawlRun, seed: Url) {
        let mut stack: Vec<(Url, u32)> = vec![(seed, 0)];

        while let Some((url, depth)) = stack.pop() {
            if !run.admit(&url, depth) {
                continue;
            }

            tracing::debug!("Crawling [depth {}]: {}", depth, url);

            match self.fetcher.fetch(url.as_str()).await {
                Ok(page) => {
                    let links = run.record_page(&url, page);
                    for link in links.into_iter().rev() {
                        stack.push((link, depth + 1));
                    }
                }
                Err(e) => run.record_failure(&url, &e),
            }
        }
    }

    /// Breadth-first traversal with bounded concurrent fetches per wave
    ///
    /// Admission (depth check and visited claim) and graph insertion stay in
    /// this task; only the fetches overlap.
    async fn crawl_breadth_first(&self, run: &mut CrawlRun, seed: Url) {
        let fetcher = &self.fetcher;
        let mut wave: Vec<(Url, u32)> = vec![(seed, 0)];

        while !wave.is_empty() {
            let admitted: Vec<(Url, u32)> = wave
                .into_iter()
                .filter(|(url, depth)| run.admit(url, *depth))
                .collect();

            tracing::debug!("Fetching wave of {} pages", admitted.len());

            let results: Vec<(Url, u32, Result<FetchedPage, FetchError>)> =
                stream::iter(admitted)
                    .map(move |(url, depth)| async move {
                        let result = fetcher.fetch(url.as_str()).await;
                        (url, depth, result)
                    })
                    .buffered(self.config.concurrency)
                    .collect()
                    .await;

            let mut next = Vec::new();
            for (url, depth, result) in results {
                match result {
                    Ok(page) => {
                        for link in run.record_page(&url, page) {
                            next.push((link, depth + 1));
                        }
                    }
                    Err(e) => run.record_failure(&url, &e),
                }
            }
            wave = next;
        }
    }
}

/// Mutable state of a single crawl run
struct CrawlRun {
    scope: SiteScope,
    max_depth: u32,
    max_pages: Option<usize>,
    visited: VisitedSet,
    graph: PageGraphBuilder,
    statistics: CrawlStatistics,
}

impl CrawlRun {
    fn new(scope: SiteScope, max_depth: u32, max_pages: Option<usize>) -> Self {
        Self {
            scope,
            max_depth,
            max_pages,
            visited: VisitedSet::new(),
            graph: PageGraphBuilder::new(),
            statistics: CrawlStatistics::new(),
        }
    }

    fn page_limit_reached(&self) -> bool {
        self.max_pages
            .is_some_and(|limit| self.graph.len() >= limit)
    }

    /// Decides whether a pending URL gets fetched, claiming it if so
    ///
    /// The depth check comes first and does not claim the URL.
    fn admit(&mut self, url: &Url, depth: u32) -> bool {
        if depth > self.max_depth {
            tracing::trace!("Depth {} exceeds max depth: {}", depth, url);
            self.statistics.record(PageState::DepthExceeded);
            return false;
        }

        if self.visited.contains(url.as_str()) {
            tracing::trace!("Already visited: {}", url);
            return false;
        }

        if self.page_limit_reached() {
            tracing::debug!("Page limit reached, skipping {}", url);
            self.statistics.record(PageState::PageLimitHit);
            return false;
        }

        self.visited.mark(url.as_str())
    }

    /// Records a fetched page and returns its in-scope links in page order
    fn record_page(&mut self, url: &Url, page: FetchedPage) -> Vec<Url> {
        if self.page_limit_reached() {
            tracing::debug!("Page limit reached, dropping fetched page {}", url);
            self.statistics.record(PageState::PageLimitHit);
            return Vec::new();
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut links: Vec<Url> = Vec::new();

        for href in &page.hrefs {
            let Some(link) = resolve_link(href, url) else {
                tracing::debug!("Unresolvable href {:?} on {}", href, url);
                self.statistics.unresolvable_links += 1;
                continue;
            };

            if !self.scope.contains(&link) {
                tracing::trace!("External link skipped: {}", link);
                self.statistics.external_links_skipped += 1;
                continue;
            }

            if seen.insert(link.to_string()) {
                links.push(link);
            }
        }

        let title = page.title.unwrap_or_else(|| url.to_string());
        let record = PageRecord::new(title, links.iter().map(Url::to_string));

        self.statistics.links_discovered += record.links.len() as u64;
        self.statistics.record(PageState::Processed);
        self.graph.insert(url.to_string(), record);

        links
    }

    fn record_failure(&mut self, url: &Url, error: &FetchError) {
        tracing::warn!("Error crawling {}: {}", url, error);
        self.statistics.record(PageState::Failed);
    }

    fn finish(mut self, seed: String) -> CrawlOutcome {
        self.statistics.pages_visited = self.visited.len() as u64;

        CrawlOutcome {
            seed,
            graph: self.graph.finish(),
            visited: self.visited,
            statistics: self.statistics,
        }
    }
}
