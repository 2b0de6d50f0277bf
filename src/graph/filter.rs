//! Global navigation link detection
//!
//! A link that appears on a large share of pages (site header, footer, sidebar)
//! says little about how users move through the site. This module counts, for
//! every link, the number of distinct pages carrying it, and strips the links
//! whose share of pages reaches the threshold.

use crate::graph::page_graph::{PageGraph, PageRecord};
use std::collections::{HashMap, HashSet};

/// Number of distinct pages on which each link appears
#[derive(Debug, Clone, Default)]
pub struct LinkFrequencyTable {
    counts: HashMap<String, usize>,
    first_seen: Vec<String>,
    total_pages: usize,
}

impl LinkFrequencyTable {
    /// Counts link presence across a page graph
    ///
    /// A link repeated on one page counts once for that page.
    pub fn from_graph(graph: &PageGraph) -> Self {
        let mut table = Self {
            total_pages: graph.len(),
            ..Self::default()
        };

        for (_, record) in graph.iter() {
            let mut on_page: HashSet<&str> = HashSet::new();
            for link in &record.links {
                if !on_page.insert(link.as_str()) {
                    continue;
                }
                match table.counts.get_mut(link) {
                    Some(count) => *count += 1,
                    None => {
                        table.counts.insert(link.clone(), 1);
                        table.first_seen.push(link.clone());
                    }
                }
            }
        }

        table
    }

    /// Number of pages the table was computed over
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Number of distinct links seen
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    /// Returns true if no links were seen
    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// Number of pages linking to `link`
    pub fn count(&self, link: &str) -> usize {
        self.counts.get(link).copied().unwrap_or(0)
    }

    /// Share of pages linking to `link`, or None when the table covers no pages
    pub fn frequency(&self, link: &str) -> Option<f64> {
        if self.total_pages == 0 {
            return None;
        }
        Some(self.count(link) as f64 / self.total_pages as f64)
    }

    /// Returns true if `link` appears on at least `threshold` of all pages
    pub fn is_global(&self, link: &str, threshold: f64) -> bool {
        match self.frequency(link) {
            Some(freq) => self.count(link) > 0 && freq >= threshold,
            None => false,
        }
    }

    /// All global links, in the order they were first seen
    pub fn global_links(&self, threshold: f64) -> Vec<String> {
        self.first_seen
            .iter()
            .filter(|link| self.is_global(link, threshold))
            .cloned()
            .collect()
    }
}

/// Removes global navigation links from every page
///
/// Titles and the relative order of the remaining links are unchanged. The input
/// graph is not modified. An empty graph yields an empty graph.
///
/// # Examples
///
/// ```
/// use flow_mapper::graph::{filter_global_links, PageGraph, PageRecord};
///
/// let graph: PageGraph = vec![
///     ("/a".to_string(), PageRecord::new("A", vec!["/nav".to_string(), "/b".to_string()])),
///     ("/b".to_string(), PageRecord::new("B", vec!["/nav".to_string()])),
/// ]
/// .into_iter()
/// .collect();
///
/// let cleaned = filter_global_links(&graph, 0.7);
/// assert_eq!(cleaned.get("/a").unwrap().links, vec!["/b".to_string()]);
/// assert!(cleaned.get("/b").unwrap().links.is_empty());
/// ```
pub fn filter_global_links(graph: &PageGraph, threshold: f64) -> PageGraph {
    if graph.is_empty() {
        return PageGraph::new();
    }

    let table = LinkFrequencyTable::from_graph(graph);
    let global = table.global_links(threshold);

    if !global.is_empty() {
        tracing::debug!(
            "Classified {} of {} links as global navigation",
            global.len(),
            table.len()
        );
    }

    remove_links(graph, &global)
}

/// Removes the given links from every page
///
/// Use this with `LinkFrequencyTable::global_links` when the classified links
/// are also needed by the caller, so the table is only built once.
pub fn remove_links(graph: &PageGraph, removed: &[String]) -> PageGraph {
    let global: HashSet<&str> = removed.iter().map(String::as_str).collect();

    graph
        .iter()
        .map(|(url, record)| {
            let links = record
                .links
                .iter()
                .filter(|link| !global.contains(link.as_str()))
                .cloned()
                .collect();
            (
                url.to_string(),
                PageRecord {
                    title: record.title.clone(),
                    links,
                },
            )
        })
        .collect()
}
