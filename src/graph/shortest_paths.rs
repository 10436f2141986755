//! All-pairs shortest paths (Floyd-Warshall) with first-hop reconstruction

use ndarray::Array2;

use crate::graph::Graph;

/// Distance and first-hop matrices for every ordered vertex pair.
///
/// `distance(i, j)` is `f64::INFINITY` when j is unreachable from i.
/// `next_hop(i, j)` is the vertex right after i on a shortest i -> j path,
/// or `None` for self pairs and unreachable pairs.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    dist: Array2<f64>,
    next: Array2<Option<usize>>,
}

/// Compute shortest paths between all pairs of vertices.
///
/// Relaxations only apply when the candidate sum is strictly positive, so
/// zero-weight detours never replace an existing path. Self loops are ignored
/// and `dist[v][v]` stays 0.
pub fn all_pairs_shortest_paths<G: Graph>(graph: &G) -> ShortestPaths {
    let n = graph.vertex_count();
    log::trace!("Computing all-pairs shortest paths over {} vertices", n);

    let mut dist = Array2::from_elem((n, n), f64::INFINITY);
    let mut next = Array2::from_elem((n, n), None);

    for v in 0..n {
        dist[[v, v]] = 0.0;
    }

    // Direct edges
    for v in 0..n {
        for edge in graph.outgoing(v) {
            if edge.vertex == v {
                continue;
            }
            dist[[v, edge.vertex]] = edge.weight;
            next[[v, edge.vertex]] = Some(edge.vertex);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let to_k = dist[[i, k]];
            if to_k.is_infinite() {
                continue;
            }
            for j in 0..n {
                let candidate = to_k + dist[[k, j]];
                if candidate > 0.0 && candidate < dist[[i, j]] {
                    dist[[i, j]] = candidate;
                    let hop = resolve_first_hop(&next, i, k);
                    next[[i, j]] = hop;
                }
            }
        }
    }

    ShortestPaths { dist, next }
}

/// Chase `next` from `next[i][k]` until reaching a vertex y whose entry
/// `next[i][y]` points at itself. The chase is bounded by the vertex count.
fn resolve_first_hop(next: &Array2<Option<usize>>, i: usize, k: usize) -> Option<usize> {
    let mut hop = next[[i, k]]?;
    for _ in 0..next.nrows() {
        match next[[i, hop]] {
            Some(after) if after != hop => hop = after,
            _ => break,
        }
    }
    Some(hop)
}

impl ShortestPaths {
    /// Number of vertices covered by the matrices
    pub fn vertex_count(&self) -> usize {
        self.dist.nrows()
    }

    /// Shortest distance from `src` to `dst`
    pub fn distance(&self, src: usize, dst: usize) -> f64 {
        self.dist[[src, dst]]
    }

    /// First vertex after `src` on the shortest path to `dst`
    pub fn next_hop(&self, src: usize, dst: usize) -> Option<usize> {
        self.next[[src, dst]]
    }

    /// Edges of the reconstructed `src -> dst` path, in order
    pub fn hops(&self, src: usize, dst: usize) -> Hops<'_> {
        Hops {
            next: &self.next,
            current: src,
            target: dst,
            remaining: self.vertex_count(),
        }
    }

    /// Vertices of the reconstructed path, both endpoints included.
    ///
    /// Returns `None` if `dst` is unreachable or the chain does not end at `dst`.
    pub fn path(&self, src: usize, dst: usize) -> Option<Vec<usize>> {
        if src == dst {
            return Some(vec![src]);
        }
        self.next_hop(src, dst)?;

        let mut path = vec![src];
        path.extend(self.hops(src, dst).map(|(_, to)| to));
        (path.last() == Some(&dst)).then_some(path)
    }

    /// Sum of the graph weights along the reconstructed path
    pub fn path_weight<G: Graph>(&self, graph: &G, src: usize, dst: usize) -> Option<f64> {
        let path = self.path(src, dst)?;
        path.windows(2).try_fold(0.0, |total, pair| {
            graph
                .outgoing(pair[0])
                .find(|n| n.vertex == pair[1])
                .map(|n| total + n.weight)
        })
    }
}

/// Iterator over the directed edges of a reconstructed shortest path
pub struct Hops<'a> {
    next: &'a Array2<Option<usize>>,
    current: usize,
    target: usize,
    remaining: usize,
}

impl Iterator for Hops<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let hop = self.next[[self.current, self.target]]?;
        self.remaining -= 1;

        let edge = (self.current, hop);
        self.current = hop;
        Some(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedDigraph;

    fn sample() -> WeightedDigraph {
        // Vertex 4 is isolated
        WeightedDigraph::from_edges(
            5,
            [
                (0, 1, 2.0),
                (1, 2, 3.0),
                (0, 2, 7.0),
                (2, 3, 1.0),
                (3, 0, 4.0),
                (1, 3, 8.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn self_distance_is_zero_without_next() {
        let sp = all_pairs_shortest_paths(&sample());
        for v in 0..5 {
            assert_eq!(sp.distance(v, v), 0.0);
            assert_eq!(sp.next_hop(v, v), None);
        }
    }

    #[test]
    fn shorter_multi_hop_path_wins() {
        let sp = all_pairs_shortest_paths(&sample());
        assert_eq!(sp.distance(0, 2), 5.0);
        assert_eq!(sp.next_hop(0, 2), Some(1));
        assert_eq!(sp.distance(1, 0), 8.0);
        assert_eq!(sp.path(1, 0), Some(vec![1, 2, 3, 0]));
        assert_eq!(sp.path(3, 2), Some(vec![3, 0, 1, 2]));
    }

    #[test]
    fn directed_distances_are_not_symmetric() {
        let sp = all_pairs_shortest_paths(&sample());
        assert_eq!(sp.distance(0, 1), 2.0);
        assert_eq!(sp.distance(1, 0), 8.0);
    }

    #[test]
    fn unreachable_pairs_keep_sentinels() {
        let sp = all_pairs_shortest_paths(&sample());
        for v in 0..4 {
            assert!(sp.distance(v, 4).is_infinite());
            assert!(sp.distance(4, v).is_infinite());
            assert_eq!(sp.next_hop(v, 4), None);
            assert_eq!(sp.path(4, v), None);
        }
    }

    #[test]
    fn triangle_inequality_holds() {
        let sp = all_pairs_shortest_paths(&sample());
        for i in 0..5 {
            for j in 0..5 {
                for k in 0..5 {
                    let (a, b) = (sp.distance(i, k), sp.distance(k, j));
                    if a.is_finite() && b.is_finite() {
                        assert!(sp.distance(i, j) <= a + b, "{} -> {} via {}", i, j, k);
                    }
                }
            }
        }
    }

    #[test]
    fn reconstructed_paths_match_distances() {
        let graph = sample();
        let sp = all_pairs_shortest_paths(&graph);
        for i in 0..5 {
            for j in 0..5 {
                if i != j && sp.distance(i, j).is_finite() {
                    assert_eq!(sp.path_weight(&graph, i, j), Some(sp.distance(i, j)));
                }
            }
        }
    }

    #[test]
    fn empty_graph_yields_empty_matrices() {
        let sp = all_pairs_shortest_paths(&WeightedDigraph::new(0));
        assert_eq!(sp.vertex_count(), 0);
    }
}
