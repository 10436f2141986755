//! `Graph` implementation for petgraph's stable digraph
//!
//! Vertex ids are node indices, so the graph must not have had nodes removed
//! (indices `0..node_count()` must all be occupied).

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::graph::{Graph, Neighbor};

impl<N, E> Graph for StableDiGraph<N, E>
where
    E: Copy + Into<f64>,
{
    fn vertex_count(&self) -> usize {
        self.node_count()
    }

    fn is_adjacent(&self, src: usize, dst: usize) -> bool {
        self.contains_edge(NodeIndex::new(src), NodeIndex::new(dst))
    }

    fn outgoing(&self, v: usize) -> impl Iterator<Item = Neighbor> + '_ {
        self.edges_directed(NodeIndex::new(v), Direction::Outgoing)
            .map(|e| Neighbor {
                vertex: e.target().index(),
                weight: (*e.weight()).into(),
            })
    }

    fn incoming(&self, v: usize) -> impl Iterator<Item = Neighbor> + '_ {
        self.edges_directed(NodeIndex::new(v), Direction::Incoming)
            .map(|e| Neighbor {
                vertex: e.source().index(),
                weight: (*e.weight()).into(),
            })
    }

    fn remove_edge(&mut self, src: usize, dst: usize) -> bool {
        match self.find_edge(NodeIndex::new(src), NodeIndex::new(dst)) {
            Some(edge) => StableDiGraph::remove_edge(self, edge).is_some(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::all_pairs_shortest_paths;

    #[test]
    fn stable_digraph_satisfies_contract() {
        let mut g: StableDiGraph<&str, u32> = StableDiGraph::new();
        let a = g.add_node("a");
        let b = g.add_node("b");
        let c = g.add_node("c");
        g.add_edge(a, b, 2);
        g.add_edge(b, c, 3);

        assert_eq!(Graph::vertex_count(&g), 3);
        assert!(Graph::is_adjacent(&g, 0, 1));
        assert_eq!(
            Graph::incoming(&g, 2).collect::<Vec<_>>(),
            vec![Neighbor { vertex: 1, weight: 3.0 }]
        );

        let sp = all_pairs_shortest_paths(&g);
        assert_eq!(sp.distance(0, 2), 5.0);

        assert!(Graph::remove_edge(&mut g, 0, 1));
        assert!(!Graph::remove_edge(&mut g, 0, 1));
        assert!(!Graph::is_adjacent(&g, 0, 1));
    }
}
