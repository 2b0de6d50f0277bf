/// Page state definitions for tracking crawl progress
///
/// Every URL the crawler pops off its work stack ends in exactly one of these states.
use std::fmt;

/// Represents the outcome of considering a URL during a crawl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    /// Page was successfully fetched and recorded in the page graph
    Processed,

    /// Fetch failed (network error, non-success status, timeout)
    Failed,

    /// Page sits beyond the maximum crawl depth and was never fetched
    DepthExceeded,

    /// The page graph had already reached its configured size limit
    PageLimitHit,
}

impl PageState {
    /// Stable lowercase label used in logs and statistics output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Failed => "failed",
            Self::DepthExceeded => "depth_exceeded",
            Self::PageLimitHit => "page_limit_hit",
        }
    }

    /// Returns all possible page states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Processed,
            Self::Failed,
            Self::DepthExceeded,
            Self::PageLimitHit,
        ]
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
