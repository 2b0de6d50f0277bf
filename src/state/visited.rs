use std::collections::HashSet;

/// URLs already claimed during a single crawl run
///
/// The set only grows. Claiming is a single check-then-insert step, so a URL
/// is handed to the fetcher at most once per run.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Creates an empty visited set
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a URL, returning false if it was already claimed
    pub fn mark(&mut self, url: &str) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    /// Returns true if the URL has been claimed
    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Number of claimed URLs
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    /// Returns true if nothing has been claimed yet
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Iterates the claimed URLs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }
}
