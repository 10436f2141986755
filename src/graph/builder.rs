//! Graph construction module

use std::collections::HashMap;

use crate::error::GraphError;
use crate::graph::WeightedDigraph;

/// Builder for incrementally constructing a WeightedDigraph from string ids
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// Mapping from string IDs to vertex indices
    id_to_index: HashMap<String, usize>,

    /// Vertex string IDs, in index order
    node_ids: Vec<String>,

    /// Edges as (src, dst, weight)
    edges: Vec<(usize, usize, f64)>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            edges: Vec::new(),
        }
    }

    /// Get or create a vertex index for the given string ID
    pub fn get_or_create_node(&mut self, id: &str) -> usize {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.node_ids.len();
        self.id_to_index.insert(id.to_string(), idx);
        self.node_ids.push(id.to_string());
        idx
    }

    /// Add a weighted edge from one node to another
    pub fn add_edge(&mut self, src_id: &str, dst_id: &str, weight: f64) {
        let src = self.get_or_create_node(src_id);
        let dst = self.get_or_create_node(dst_id);
        self.edges.push((src, dst, weight));
    }

    /// Number of vertices seen so far
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Build the graph, validating every edge
    pub fn build(self) -> Result<WeightedDigraph, GraphError> {
        let mut graph = WeightedDigraph::from_edges(self.node_ids.len(), self.edges)?;
        graph.node_ids = Some(self.node_ids);
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn assigns_indices_in_first_seen_order() {
        let mut builder = GraphBuilder::with_capacity(4);
        builder.add_edge("alice", "bob", 1.0);
        builder.add_edge("bob", "carol", 2.0);
        builder.get_or_create_node("dave");

        let graph = builder.build().unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.label(2), "carol");
        assert_eq!(graph.weight(1, 2), Some(2.0));
        assert_eq!(graph.out_degree(3), 0);
    }

    #[test]
    fn build_rejects_self_loops() {
        let mut builder = GraphBuilder::default();
        builder.add_edge("a", "a", 1.0);
        assert_eq!(builder.build(), Err(GraphError::SelfLoop(0)));
    }
}
