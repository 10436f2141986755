//! Graph representation and shortest-path module

pub mod adapter;
pub mod builder;
pub mod digraph;
pub mod shortest_paths;

use serde::{Deserialize, Serialize};

pub use builder::GraphBuilder;
pub use digraph::WeightedDigraph;
pub use shortest_paths::{all_pairs_shortest_paths, ShortestPaths};

/// One adjacency entry: the vertex on the other end and the edge weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub vertex: usize,
    pub weight: f64,
}

/// Contract the pipeline relies on for a weighted directed graph over
/// vertex ids `0..vertex_count()`.
///
/// Weights are expected to be finite and non-negative. Graphs that break
/// this must be rejected before they reach the pipeline.
pub trait Graph {
    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// Whether the directed edge `src -> dst` is present
    fn is_adjacent(&self, src: usize, dst: usize) -> bool;

    /// Edges leaving `v`
    fn outgoing(&self, v: usize) -> impl Iterator<Item = Neighbor> + '_;

    /// Edges entering `v`, each reported with its source vertex
    fn incoming(&self, v: usize) -> impl Iterator<Item = Neighbor> + '_;

    /// Remove the directed edge `src -> dst`, returning whether it existed
    fn remove_edge(&mut self, src: usize, dst: usize) -> bool;
}
