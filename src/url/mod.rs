//! URL handling module for Flow-Mapper
//!
//! This module provides link resolution, fragment stripping, and the
//! same-site check that keeps the crawl on the seed's host.

mod domain;
mod normalize;

pub use domain::{extract_domain, SiteScope};
pub use normalize::{normalize_url, resolve_link, strip_fragment};
