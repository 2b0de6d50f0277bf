use std::collections::{HashMap, HashSet};

/// A successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// The page title, or the page URL when the document declared none
    pub title: String,

    /// Internal links in first-seen order, each listed once
    pub links: Vec<String>,
}

impl PageRecord {
    /// Creates a record, dropping repeated links while keeping first-seen order
    pub fn new(title: impl Into<String>, links: impl IntoIterator<Item = String>) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut unique: Vec<String> = Vec::new();
        for link in links {
            if seen.insert(link.clone()) {
                unique.push(link);
            }
        }

        Self {
            title: title.into(),
            links: unique,
        }
    }
}

/// Read-only mapping from page URL to its record
///
/// Iteration follows insertion order. A graph is produced either by freezing a
/// `PageGraphBuilder` or by collecting `(url, record)` pairs; there is no way to
/// mutate it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageGraph {
    pages: Vec<(String, PageRecord)>,
    index: HashMap<String, usize>,
}

impl PageGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns true if the graph holds no pages
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Looks up the record for a page URL
    pub fn get(&self, url: &str) -> Option<&PageRecord> {
        self.index.get(url).map(|&idx| &self.pages[idx].1)
    }

    /// Returns true if the URL is a page in this graph
    pub fn contains(&self, url: &str) -> bool {
        self.index.contains_key(url)
    }

    /// Iterates `(url, record)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageRecord)> {
        self.pages.iter().map(|(url, record)| (url.as_str(), record))
    }

    /// Iterates page URLs in insertion order
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|(url, _)| url.as_str())
    }

    /// Total number of links across all pages
    pub fn link_count(&self) -> usize {
        self.pages.iter().map(|(_, record)| record.links.len()).sum()
    }
}

impl FromIterator<(String, PageRecord)> for PageGraph {
    /// Collects pairs into a graph; a repeated URL keeps its first record
    fn from_iter<I: IntoIterator<Item = (String, PageRecord)>>(iter: I) -> Self {
        let mut builder = PageGraphBuilder::new();
        for (url, record) in iter {
            builder.insert(url, record);
        }
        builder.finish()
    }
}

/// Mutable page graph under construction during a crawl
#[derive(Debug, Default)]
pub struct PageGraphBuilder {
    graph: PageGraph,
}

impl PageGraphBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a page, returning false if the URL is already present
    pub fn insert(&mut self, url: String, record: PageRecord) -> bool {
        if self.graph.index.contains_key(&url) {
            return false;
        }

        self.graph.index.insert(url.clone(), self.graph.pages.len());
        self.graph.pages.push((url, record));
        true
    }

    /// Number of pages inserted so far
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Returns true if no page has been inserted yet
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Freezes the builder into an immutable graph
    pub fn finish(self) -> PageGraph {
        self.graph
    }
}
