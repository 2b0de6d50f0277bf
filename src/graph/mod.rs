//! Page graph model and the pure transformation stages built on it
//!
//! This module contains the data model shared by every pipeline stage:
//! - `PageGraph`: the frozen, insertion-ordered result of a crawl
//! - Global navigation link detection and removal
//! - Projection into a node/edge `FlowGraph`

mod filter;
mod flow;
mod page_graph;

pub use filter::{filter_global_links, remove_links, LinkFrequencyTable};
pub use flow::{build_flow_graph, FlowEdge, FlowGraph, FlowNode};
pub use page_graph::{PageGraph, PageGraphBuilder, PageRecord};
