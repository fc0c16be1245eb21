//! Network index: adjacency lookup from a node to its outgoing edges.

use std::collections::HashMap;

use crate::domain::{Edge, NodeId};

/// Read-only view of a route network, as consumed by the planner.
///
/// This abstraction allows the planner to be tested with mock graphs.
pub trait RouteGraph {
    /// Outgoing edges of `node`, in insertion order.
    ///
    /// Unknown nodes have no outgoing edges.
    fn edges_from(&self, node: &NodeId) -> &[Edge];
}

/// Adjacency index built from an ordered list of edges.
///
/// An index only exists once built, so a planner can never run against an
/// index that was never loaded.
#[derive(Debug, Clone)]
pub struct NetworkIndex {
    adjacency: HashMap<NodeId, Vec<Edge>>,
    edge_count: usize,
}

impl NetworkIndex {
    /// Build an index from edges, grouping them by origin node.
    pub fn build(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut index = Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        };
        index.rebuild(edges);
        index
    }

    /// Replace the index content with `edges`.
    pub fn rebuild(&mut self, edges: impl IntoIterator<Item = Edge>) {
        self.adjacency.clear();
        self.edge_count = 0;
        for edge in edges {
            self.adjacency
                .entry(edge.from.clone())
                .or_default()
                .push(edge);
            self.edge_count += 1;
        }
    }

    /// Number of edges in the index.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of nodes with at least one outgoing edge.
    pub fn origin_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl RouteGraph for NetworkIndex {
    fn edges_from(&self, node: &NodeId) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }
}
