//! Plain-text weighted edge lists
//!
//! One edge per line: `src dst [weight]`, separated by whitespace or commas.
//! Blank lines and lines starting with `#` are skipped. A missing weight
//! defaults to 1.

use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::graph::{GraphBuilder, WeightedDigraph};

/// Load an edge list file into a graph
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<WeightedDigraph> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());

    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let graph = parse_edge_list(&text)?;

    log::info!(
        "Loaded graph with {} vertices and {} edges",
        graph.node_ids.as_ref().map_or(0, Vec::len),
        graph.edge_count()
    );

    Ok(graph)
}

/// Parse edge list text into a graph
pub fn parse_edge_list(text: &str) -> Result<WeightedDigraph> {
    let mut builder = GraphBuilder::with_capacity(1024);

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();

        let weight = match fields.as_slice() {
            [_, _] => 1.0,
            [_, _, weight] => weight
                .parse::<f64>()
                .with_context(|| format!("Line {}: bad weight {:?}", line_no + 1, weight))?,
            _ => {
                return Err(anyhow!(
                    "Line {}: expected `src dst [weight]`, got {:?}",
                    line_no + 1,
                    line
                ))
            }
        };

        builder.add_edge(fields[0], fields[1], weight);
    }

    log::debug!("Parsed {} vertices", builder.node_count());
    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn parses_mixed_separators_and_defaults() {
        let text = "# comment\n a b 2.5\n\nb,c\nc\td\t4\n";
        let g = parse_edge_list(text).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.weight(0, 1), Some(2.5));
        assert_eq!(g.weight(1, 2), Some(1.0));
        assert_eq!(g.weight(2, 3), Some(4.0));
        assert_eq!(g.label(3), "d");
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_edge_list("a\n").is_err());
        assert!(parse_edge_list("a b c d\n").is_err());
        assert!(parse_edge_list("a b heavy\n").is_err());
        assert!(parse_edge_list("a b -1\n").is_err());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edges.txt");
        std::fs::write(&path, "0 1\n1 2\n").unwrap();

        let g = load_edge_list(&path).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert!(load_edge_list(dir.path().join("missing.txt")).is_err());
    }
}
