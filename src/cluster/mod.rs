//! Community detection module

pub mod betweenness;
pub mod components;
pub mod dendrogram;
pub mod girvan_newman;
pub mod metrics;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

pub use betweenness::{edge_betweenness, edge_betweenness_centrality, EdgeValues, NOT_AN_EDGE};
pub use dendrogram::{Dendrogram, DendrogramNode, NodeId};
pub use girvan_newman::{girvan_newman, GirvanNewman};

/// One recorded split of the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Split {
    /// Every edge removed while producing this split, in removal order
    pub removed: Vec<(usize, usize)>,

    /// Source of the last removed edge; becomes the left child in the dendrogram
    pub src: usize,

    /// Target of the last removed edge; becomes the right child
    pub dest: usize,

    /// Highest betweenness of the iteration that produced the split
    pub score: f64,

    /// Number of connected components after the split
    pub component_count: usize,

    /// Component id of each vertex after the split
    pub membership: Vec<usize>,
}

/// Result of a Girvan-Newman run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
    /// Number of vertices in the input graph
    pub vertex_count: usize,

    /// Connected components before any removal
    pub initial_components: usize,

    /// Component id of each vertex before any removal
    pub initial_membership: Vec<usize>,

    /// Hierarchy of splits
    pub dendrogram: Dendrogram,

    /// Splits in the order they happened
    pub splits: Vec<Split>,
}

impl Partition {
    /// Number of levels available: the initial state plus one per split
    pub fn levels(&self) -> usize {
        self.splits.len() + 1
    }

    /// Component ids after `level` splits (level 0 is the input graph)
    pub fn membership(&self, level: usize) -> Option<&[usize]> {
        match level {
            0 => Some(&self.initial_membership),
            _ => self.splits.get(level - 1).map(|s| s.membership.as_slice()),
        }
    }

    /// Vertex groups after `level` splits, ordered by component id
    pub fn communities(&self, level: usize) -> Option<Vec<Vec<usize>>> {
        self.membership(level).map(group_members)
    }

    /// Level with the highest modularity against the original graph.
    ///
    /// The first level wins ties.
    pub fn best_level<G: Graph>(&self, original: &G) -> (usize, f64) {
        let mut best = (0, f64::NEG_INFINITY);
        for level in 0..self.levels() {
            if let Some(membership) = self.membership(level) {
                let q = metrics::modularity(original, membership);
                if q > best.1 {
                    best = (level, q);
                }
            }
        }
        best
    }
}

/// Group vertices by component id
pub fn group_members(membership: &[usize]) -> Vec<Vec<usize>> {
    let count = membership.iter().max().map_or(0, |&max| max + 1);
    let mut groups = vec![Vec::new(); count];
    for (vertex, &component) in membership.iter().enumerate() {
        groups[component].push(vertex);
    }
    groups
}
