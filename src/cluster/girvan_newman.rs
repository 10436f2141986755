//! Girvan-Newman divisive community detection
//!
//! Each iteration rescores every edge on the current graph, removes the
//! highest-scoring one, and records a split in the dendrogram once the
//! number of connected components grows. When a single removal does not
//! split the graph, further edges tied at the same score are removed until
//! it does.
//!
//! Split anchoring lags one iteration behind: after a split, every vertex in
//! the component of `src` remembers `src` as its representative (and likewise
//! for `dest`). The next split whose `src` lies in that lineage is attached
//! below the leaf carrying the representative.

use crate::cluster::betweenness::edge_betweenness;
use crate::cluster::components::connected_components;
use crate::cluster::{Dendrogram, NodeId, Partition, Split};
use crate::config::Config;
use crate::error::{IncompletePartition, PartitionError};
use crate::graph::Graph;

/// Girvan-Newman driver
#[derive(Debug, Clone, Default)]
pub struct GirvanNewman {
    config: Config,
}

/// Run Girvan-Newman with the default configuration
pub fn girvan_newman<G: Graph>(graph: &mut G) -> Result<Partition, IncompletePartition> {
    GirvanNewman::default().run(graph)
}

/// Dendrogram node a split of `src -> dest` hangs from.
///
/// Without a representative the split goes under the root; otherwise under
/// the first leaf carrying the representative.
pub fn locate_anchor(
    dendrogram: &Dendrogram,
    representative: Option<usize>,
    src: usize,
    dest: usize,
) -> Result<NodeId, PartitionError> {
    match representative {
        None => Ok(Dendrogram::ROOT),
        Some(vertex) => dendrogram
            .find_leaf(vertex)
            .ok_or(PartitionError::AnchorNotFound { vertex, src, dest }),
    }
}

impl GirvanNewman {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Partition `graph`, removing edges from it in place.
    ///
    /// Stops when no scored edge remains, when every vertex is isolated, or
    /// after `max_splits` recorded splits. If a split cannot be placed in the
    /// dendrogram the run stops there and the error carries every split
    /// recorded before it.
    pub fn run<G: Graph>(&self, graph: &mut G) -> Result<Partition, IncompletePartition> {
        let n = graph.vertex_count();
        log::info!("Running Girvan-Newman over {} vertices", n);

        let mut component_of = Vec::with_capacity(n);
        let initial_components = connected_components(graph, &mut component_of);
        log::debug!("Input graph has {} connected components", initial_components);

        let mut partition = Partition {
            vertex_count: n,
            initial_components,
            initial_membership: component_of.clone(),
            dendrogram: Dendrogram::new(),
            splits: Vec::new(),
        };

        match self.split_until_done(graph, &mut partition, &mut component_of) {
            Ok(components) => {
                log::info!(
                    "Girvan-Newman finished with {} splits and {} components",
                    partition.splits.len(),
                    components
                );
                Ok(partition)
            }
            Err(error) => {
                log::warn!(
                    "Girvan-Newman stopped after {} splits: {}",
                    partition.splits.len(),
                    error
                );
                Err(IncompletePartition {
                    error,
                    partial: partition,
                })
            }
        }
    }

    /// Main loop; returns the final component count
    fn split_until_done<G: Graph>(
        &self,
        graph: &mut G,
        partition: &mut Partition,
        component_of: &mut Vec<usize>,
    ) -> Result<usize, PartitionError> {
        let n = partition.vertex_count;
        let mut parent_of: Vec<Option<usize>> = vec![None; n];
        let mut components = partition.initial_components;

        while components < n {
            let recorded = partition.splits.len();
            if self.config.max_splits.map_or(false, |max| recorded >= max) {
                log::info!("Reached split limit of {}", recorded);
                break;
            }

            // 1. Rescore the current graph
            let values = edge_betweenness(graph, self.config.parallel);

            // 2. Pick the highest edge
            let Some((mut src, mut dest, max)) = values.max_edge() else {
                log::debug!("No scored edge remains");
                break;
            };

            // 3. Remove it and recount
            graph.remove_edge(src, dest);
            let mut removed = vec![(src, dest)];
            log::debug!("Removed {} -> {} (betweenness {})", src, dest, max);
            let mut count = connected_components(graph, component_of);

            // 4. Keep removing tied edges until the graph splits
            while count == components {
                let before = removed.len();
                for (i, j, score) in values.scored_edges() {
                    if score >= max
                        && self.config.tie_rule.admits(i, j, src, dest)
                        && graph.remove_edge(i, j)
                    {
                        log::debug!("Removed tied edge {} -> {} (betweenness {})", i, j, score);
                        src = i;
                        dest = j;
                        removed.push((i, j));
                    }
                }
                if removed.len() == before {
                    break;
                }
                count = connected_components(graph, component_of);
            }

            if count == components {
                log::debug!("No split after removing {} edge(s), rescoring", removed.len());
                continue;
            }

            // 5. Place the split in the dendrogram
            let anchor = locate_anchor(&partition.dendrogram, parent_of[src], src, dest)?;
            partition.dendrogram.attach(anchor, src, dest)?;

            log::info!(
                "Split {}: removed {} edge(s), {} -> {} at betweenness {}, {} components",
                recorded + 1,
                removed.len(),
                src,
                dest,
                max,
                count
            );

            partition.splits.push(Split {
                removed,
                src,
                dest,
                score: max,
                component_count: count,
                membership: component_of.clone(),
            });
            components = count;

            if count == n {
                break;
            }

            // 6. Record representatives for the next anchor lookup
            let (src_component, dest_component) = (component_of[src], component_of[dest]);
            for (v, parent) in parent_of.iter_mut().enumerate() {
                if component_of[v] == src_component {
                    *parent = Some(src);
                } else if component_of[v] == dest_component {
                    *parent = Some(dest);
                }
            }
        }

        Ok(components)
    }
}
