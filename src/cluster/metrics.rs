//! Community quality metrics

use std::collections::HashSet;

use crate::graph::Graph;

/// Directed weighted modularity of a vertex-to-community assignment.
///
/// Q = (1/m) * sum over intra-community edges of w
///   - (1/m^2) * sum over communities of (out-strength * in-strength)
///
/// where m is the total edge weight. Graphs without weight score 0.
pub fn modularity<G: Graph>(graph: &G, membership: &[usize]) -> f64 {
    let n = graph.vertex_count();
    let communities = membership.iter().max().map_or(0, |&max| max + 1);

    let mut total = 0.0;
    let mut intra = 0.0;
    let mut out_strength = vec![0.0; communities];
    let mut in_strength = vec![0.0; communities];

    for src in 0..n {
        for edge in graph.outgoing(src) {
            let (from, to) = (membership[src], membership[edge.vertex]);
            total += edge.weight;
            out_strength[from] += edge.weight;
            in_strength[to] += edge.weight;
            if from == to {
                intra += edge.weight;
            }
        }
    }

    if total == 0.0 {
        return 0.0;
    }

    let expected: f64 = out_strength
        .iter()
        .zip(&in_strength)
        .map(|(out, inc)| out * inc)
        .sum();

    intra / total - expected / (total * total)
}

/// Calculate density (actual edges / potential edges)
pub fn calculate_density<G: Graph>(graph: &G, members: &[usize]) -> f64 {
    let n = members.len();
    if n <= 1 {
        return 1.0; // By convention, singleton communities have density 1
    }

    // Potential edges = n * (n - 1) for directed graph
    let potential_edges = n * (n - 1);

    let member_set: HashSet<usize> = members.iter().copied().collect();
    let actual_edges: usize = members
        .iter()
        .map(|&src| {
            graph
                .outgoing(src)
                .filter(|e| member_set.contains(&e.vertex))
                .count()
        })
        .sum();

    actual_edges as f64 / potential_edges as f64
}
