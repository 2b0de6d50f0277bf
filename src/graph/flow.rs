//! Node/edge projection of a cleaned page graph

use crate::graph::page_graph::PageGraph;
use serde::{Deserialize, Serialize};

/// A crawled page in the flow graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    /// The page URL
    pub id: String,
    pub title: String,
}

/// A page-to-page transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub from: String,
    pub to: String,
}

/// Final output of the mapper
///
/// Edge targets are not required to be nodes: a page may link to a URL that was
/// never crawled (beyond the depth limit, or failed to fetch).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    /// Edges whose target is not a node of this graph
    pub fn dangling_edges(&self) -> impl Iterator<Item = &FlowEdge> {
        self.edges
            .iter()
            .filter(move |edge| !self.nodes.iter().any(|node| node.id == edge.to))
    }
}

impl From<&PageGraph> for FlowGraph {
    fn from(graph: &PageGraph) -> Self {
        build_flow_graph(graph)
    }
}

/// Builds the flow graph: one node per page, one edge per `(page, link)` pair
///
/// Nodes follow the page graph's order; edges follow page order, then link order.
pub fn build_flow_graph(graph: &PageGraph) -> FlowGraph {
    let mut flow = FlowGraph {
        nodes: Vec::with_capacity(graph.len()),
        edges: Vec::with_capacity(graph.link_count()),
    };

    for (url, record) in graph.iter() {
        flow.nodes.push(FlowNode {
            id: url.to_string(),
            title: record.title.clone(),
        });

        for link in &record.links {
            flow.edges.push(FlowEdge {
                from: url.to_string(),
                to: link.clone(),
            });
        }
    }

    flow
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PageRecord;

    fn graph(pages: &[(&str, &str, &[&str])]) -> PageGraph {
        pages
            .iter()
            .map(|(url, title, links)| {
                (
                    url.to_string(),
                    PageRecord {
                        title: title.to_string(),
                        links: links.iter().map(|l| l.to_string()).collect(),
                    },
                )
            })
            .collect()
    }

    fn edge(from: &str, to: &str) -> FlowEdge {
        FlowEdge {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_nodes_follow_graph_order() {
        let flow = build_flow_graph(&graph(&[
            ("https://a.test/", "Home", &[]),
            ("https://a.test/b", "Blog", &[]),
        ]));

        assert_eq!(
            flow.nodes,
            vec![
                FlowNode {
                    id: "https://a.test/".to_string(),
                    title: "Home".to_string()
                },
                FlowNode {
                    id: "https://a.test/b".to_string(),
                    title: "Blog".to_string()
                },
            ]
        );
        assert!(flow.edges.is_empty());
    }

    #[test]
    fn test_edges_follow_page_then_link_order() {
        let flow = build_flow_graph(&graph(&[
            ("/a", "A", &["/c", "/b"]),
            ("/b", "B", &["/a"]),
        ]));

        assert_eq!(
            flow.edges,
            vec![edge("/a", "/c"), edge("/a", "/b"), edge("/b", "/a")]
        );
    }

    #[test]
    fn test_dangling_edge_preserved() {
        let flow = build_flow_graph(&graph(&[("/a", "A", &["/never-crawled"])]));

        assert_eq!(flow.edges, vec![edge("/a", "/never-crawled")]);
        assert_eq!(flow.dangling_edges().count(), 1);
    }

    #[test]
    fn test_empty_graph() {
        let flow = FlowGraph::from(&PageGraph::new());
        assert!(flow.nodes.is_empty());
        assert!(flow.edges.is_empty());
    }

    #[test]
    fn test_serialized_key_names() {
        let flow = build_flow_graph(&graph(&[("/a", "A", &["/b"])]));
        let value = serde_json::to_value(&flow).unwrap();

        assert_eq!(value["nodes"][0]["id"], "/a");
        assert_eq!(value["nodes"][0]["title"], "A");
        assert_eq!(value["edges"][0]["from"], "/a");
        assert_eq!(value["edges"][0]["to"], "/b");
    }
}
