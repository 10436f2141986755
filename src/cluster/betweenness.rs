//! Edge betweenness centrality by shortest-path reconstruction
//!
//! Each edge is scored by walking the reconstructed shortest path of every
//! ordered vertex pair and counting how many of those walks cross it. That is
//! O(N^2) path walks per edge. The per-edge walks are independent, so they can
//! be spread over the rayon pool without changing any score.

use itertools::iproduct;
use ndarray::Array2;
use rayon::prelude::*;

use crate::graph::{all_pairs_shortest_paths, Graph, ShortestPaths};

/// Score stored for vertex pairs that are not edges
pub const NOT_AN_EDGE: f64 = -1.0;

/// Betweenness score per directed vertex pair
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeValues {
    values: Array2<f64>,
}

impl EdgeValues {
    /// Number of vertices covered
    pub fn vertex_count(&self) -> usize {
        self.values.nrows()
    }

    /// Score of `src -> dst`, or `NOT_AN_EDGE`
    pub fn get(&self, src: usize, dst: usize) -> f64 {
        self.values[[src, dst]]
    }

    /// Whether `src -> dst` was scored as an edge
    pub fn is_edge(&self, src: usize, dst: usize) -> bool {
        self.get(src, dst) != NOT_AN_EDGE
    }

    /// Scored edges as `(src, dst, score)` in row-major order
    pub fn scored_edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.values
            .indexed_iter()
            .filter(|(_, &score)| score != NOT_AN_EDGE)
            .map(|((i, j), &score)| (i, j, score))
    }

    /// Highest-scoring edge; the first one in row-major order wins ties
    pub fn max_edge(&self) -> Option<(usize, usize, f64)> {
        let mut max = NOT_AN_EDGE;
        let mut best = None;
        for ((i, j), &score) in self.values.indexed_iter() {
            if score > max {
                max = score;
                best = Some((i, j, score));
            }
        }
        best
    }
}

/// Compute shortest paths and score every edge of `graph`
pub fn edge_betweenness<G: Graph>(graph: &G, parallel: bool) -> EdgeValues {
    let paths = all_pairs_shortest_paths(graph);
    edge_betweenness_centrality(graph, &paths, parallel)
}

/// Score every present edge that lies on some shortest path table entry.
///
/// Edges without a `next` entry and vertex pairs that are not edges keep
/// `NOT_AN_EDGE`; an edge that no reconstructed path crosses scores 0.0.
pub fn edge_betweenness_centrality<G: Graph>(
    graph: &G,
    paths: &ShortestPaths,
    parallel: bool,
) -> EdgeValues {
    let n = graph.vertex_count();
    let mut values = Array2::from_elem((n, n), NOT_AN_EDGE);

    let edges: Vec<(usize, usize)> = (0..n)
        .flat_map(|src| graph.outgoing(src).map(move |e| (src, e.vertex)))
        .filter(|&(src, dst)| paths.next_hop(src, dst).is_some())
        .collect();

    log::trace!("Scoring {} edges over {} vertices", edges.len(), n);

    let scores: Vec<f64> = if parallel {
        edges
            .par_iter()
            .map(|&(src, dst)| count_traversals(paths, src, dst))
            .collect()
    } else {
        edges
            .iter()
            .map(|&(src, dst)| count_traversals(paths, src, dst))
            .collect()
    };

    for (&(src, dst), score) in edges.iter().zip(scores) {
        values[[src, dst]] = score;
    }

    EdgeValues { values }
}

/// Number of (s, t) pairs whose reconstructed path crosses `src -> dst`
fn count_traversals(paths: &ShortestPaths, src: usize, dst: usize) -> f64 {
    let n = paths.vertex_count();
    let crossings: usize = iproduct!(0..n, 0..n)
        .map(|(s, t)| paths.hops(s, t).filter(|&hop| hop == (src, dst)).count())
        .sum();
    crossings as f64
}
