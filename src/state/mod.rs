//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `PageState`: The outcome recorded for each URL the crawler considered
//! - `VisitedSet`: The set of URLs already claimed during a crawl run

mod page_state;
mod visited;

// Re-export main types
pub use page_state::PageState;
pub use visited::VisitedSet;
