//! Adjacency-list weighted digraph

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::{Graph, Neighbor};

/// Directed weighted graph storing both edge directions per vertex so that
/// outgoing and incoming enumeration are equally cheap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightedDigraph {
    /// Outgoing adjacency: out_edges[v] lists (target, weight)
    out_edges: Vec<Vec<Neighbor>>,

    /// Incoming adjacency: in_edges[v] lists (source, weight)
    in_edges: Vec<Vec<Neighbor>>,

    /// Optional mapping from internal vertex ids to external string ids
    pub node_ids: Option<Vec<String>>,
}

impl WeightedDigraph {
    /// Create a graph with `vertex_count` isolated vertices
    pub fn new(vertex_count: usize) -> Self {
        Self {
            out_edges: vec![Vec::new(); vertex_count],
            in_edges: vec![Vec::new(); vertex_count],
            node_ids: None,
        }
    }

    /// Build a graph from `(src, dst, weight)` triples
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, f64)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count);
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight)?;
        }
        Ok(graph)
    }

    /// Insert `src -> dst`. Re-inserting an existing edge replaces its weight.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: f64) -> Result<(), GraphError> {
        let count = self.out_edges.len();
        for vertex in [src, dst] {
            if vertex >= count {
                return Err(GraphError::VertexOutOfRange { vertex, count });
            }
        }
        if src == dst {
            return Err(GraphError::SelfLoop(src));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { src, dst, weight });
        }

        match self.out_edges[src].iter_mut().find(|n| n.vertex == dst) {
            Some(existing) => {
                existing.weight = weight;
                if let Some(back) = self.in_edges[dst].iter_mut().find(|n| n.vertex == src) {
                    back.weight = weight;
                }
            }
            None => {
                self.out_edges[src].push(Neighbor { vertex: dst, weight });
                self.in_edges[dst].push(Neighbor { vertex: src, weight });
            }
        }
        Ok(())
    }

    /// Weight of `src -> dst`, if present
    pub fn weight(&self, src: usize, dst: usize) -> Option<f64> {
        self.out_edges
            .get(src)?
            .iter()
            .find(|n| n.vertex == dst)
            .map(|n| n.weight)
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.out_edges.iter().map(Vec::len).sum()
    }

    /// Get out-degree of a vertex
    pub fn out_degree(&self, v: usize) -> usize {
        self.out_edges[v].len()
    }

    /// Get in-degree of a vertex
    pub fn in_degree(&self, v: usize) -> usize {
        self.in_edges[v].len()
    }

    /// All edges as `(src, dst, weight)` in source order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.out_edges
            .iter()
            .enumerate()
            .flat_map(|(src, list)| list.iter().map(move |n| (src, n.vertex, n.weight)))
    }

    /// External id of a vertex, falling back to its index
    pub fn label(&self, v: usize) -> String {
        self.node_ids
            .as_ref()
            .and_then(|ids| ids.get(v).cloned())
            .unwrap_or_else(|| v.to_string())
    }
}

impl Graph for WeightedDigraph {
    fn vertex_count(&self) -> usize {
        self.out_edges.len()
    }

    fn is_adjacent(&self, src: usize, dst: usize) -> bool {
        self.out_edges
            .get(src)
            .map_or(false, |list| list.iter().any(|n| n.vertex == dst))
    }

    fn outgoing(&self, v: usize) -> impl Iterator<Item = Neighbor> + '_ {
        self.out_edges[v].iter().copied()
    }

    fn incoming(&self, v: usize) -> impl Iterator<Item = Neighbor> + '_ {
        self.in_edges[v].iter().copied()
    }

    fn remove_edge(&mut self, src: usize, dst: usize) -> bool {
        let Some(list) = self.out_edges.get_mut(src) else {
            return false;
        };
        let Some(pos) = list.iter().position(|n| n.vertex == dst) else {
            return false;
        };
        list.remove(pos);

        // Keep the reverse list in step
        if let Some(back) = self.in_edges[dst].iter().position(|n| n.vertex == src) {
            self.in_edges[dst].remove(back);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_keep_both_directions() {
        let mut g = WeightedDigraph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.5)]).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert!(g.is_adjacent(0, 1));
        assert!(!g.is_adjacent(1, 0));
        assert_eq!(g.incoming(2).collect::<Vec<_>>(), vec![Neighbor { vertex: 1, weight: 2.5 }]);

        assert!(g.remove_edge(1, 2));
        assert!(!g.remove_edge(1, 2));
        assert_eq!(g.incoming(2).count(), 0);
        assert_eq!(g.out_degree(1), 0);
    }

    #[test]
    fn re_adding_replaces_weight() {
        let mut g = WeightedDigraph::new(2);
        g.add_edge(0, 1, 4.0).unwrap();
        g.add_edge(0, 1, 2.0).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight(0, 1), Some(2.0));
        assert_eq!(g.incoming(1).next().map(|n| n.weight), Some(2.0));
    }

    #[test]
    fn rejects_malformed_edges() {
        let mut g = WeightedDigraph::new(2);
        assert_eq!(
            g.add_edge(0, 5, 1.0),
            Err(GraphError::VertexOutOfRange { vertex: 5, count: 2 })
        );
        assert_eq!(g.add_edge(1, 1, 1.0), Err(GraphError::SelfLoop(1)));
        assert!(matches!(
            g.add_edge(0, 1, -3.0),
            Err(GraphError::InvalidWeight { .. })
        ));
        assert!(g.add_edge(0, 1, f64::NAN).is_err());
        assert_eq!(g.edge_count(), 0);
    }
}
