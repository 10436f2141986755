//! Weakly connected components

use crate::graph::Graph;

/// Label every vertex with its weakly connected component and return the
/// number of components.
///
/// Searches start from each unlabelled vertex in increasing id order and
/// follow both outgoing and incoming edges, so component ids follow
/// discovery order. `component_of` is resized to the vertex count.
pub fn connected_components<G: Graph>(graph: &G, component_of: &mut Vec<usize>) -> usize {
    let n = graph.vertex_count();
    component_of.clear();
    component_of.resize(n, usize::MAX);

    let mut count = 0;
    let mut stack = Vec::new();
    for start in 0..n {
        if component_of[start] != usize::MAX {
            continue;
        }

        component_of[start] = count;
        stack.push(start);
        while let Some(v) = stack.pop() {
            for neighbor in graph.outgoing(v).chain(graph.incoming(v)) {
                if component_of[neighbor.vertex] == usize::MAX {
                    component_of[neighbor.vertex] = count;
                    stack.push(neighbor.vertex);
                }
            }
        }
        count += 1;
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::WeightedDigraph;

    #[test]
    fn direction_is_ignored() {
        // 1 is only reachable from 0 by following 1 -> 0 backwards
        let g = WeightedDigraph::from_edges(4, [(1, 0, 1.0), (3, 2, 1.0)]).unwrap();
        let mut component_of = Vec::new();
        assert_eq!(connected_components(&g, &mut component_of), 2);
        assert_eq!(component_of, vec![0, 0, 1, 1]);
    }

    #[test]
    fn ids_follow_discovery_order() {
        let g = WeightedDigraph::from_edges(5, [(4, 1, 1.0), (3, 0, 1.0)]).unwrap();
        let mut component_of = vec![9; 2];
        assert_eq!(connected_components(&g, &mut component_of), 3);
        assert_eq!(component_of, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn isolated_vertices_are_their_own_components() {
        let mut component_of = Vec::new();
        assert_eq!(connected_components(&WeightedDigraph::new(3), &mut component_of), 3);
        assert_eq!(component_of, vec![0, 1, 2]);
    }
}
