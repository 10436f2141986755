//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use serde_json::{json, to_string_pretty};

use crate::cluster::metrics::{calculate_density, modularity};
use crate::cluster::Partition;
use crate::graph::WeightedDigraph;

/// Save a partition to the specified directory.
///
/// `original` must be the graph as it was before the run removed edges.
pub fn save_results(
    partition: &Partition,
    original: &WeightedDigraph,
    output_dir: &str,
) -> Result<()> {
    log::info!("Saving {} splits to {}", partition.splits.len(), output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    save_summary(partition, original, output_dir)?;
    save_dendrogram(partition, output_dir)?;
    save_splits(partition, original, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save summary information
fn save_summary(partition: &Partition, original: &WeightedDigraph, output_dir: &str) -> Result<()> {
    log::info!("Saving summary information");

    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let (best_level, best_modularity) = partition.best_level(original);
    let communities = partition.communities(best_level).unwrap_or_default();

    let summary = json!({
        "graph_stats": {
            "vertex_count": partition.vertex_count,
            "edge_count": original.edge_count(),
            "initial_components": partition.initial_components,
        },
        "dendrogram_stats": {
            "node_count": partition.dendrogram.len(),
            "leaf_count": partition.dendrogram.leaf_count(),
            "split_count": partition.splits.len(),
            "depth": partition.dendrogram.depth(),
        },
        "best_level": {
            "level": best_level,
            "modularity": best_modularity,
            "communities": communities.iter().map(|members| {
                json!({
                    "size": members.len(),
                    "density": calculate_density(original, members),
                    "members": members.iter().map(|&v| original.label(v)).collect::<Vec<_>>(),
                })
            }).collect::<Vec<_>>(),
        }
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save the dendrogram arena
fn save_dendrogram(partition: &Partition, output_dir: &str) -> Result<()> {
    log::info!("Saving dendrogram");

    let path = Path::new(output_dir).join("dendrogram.json");
    let mut file = File::create(path)?;
    file.write_all(to_string_pretty(&partition.dendrogram)?.as_bytes())?;

    Ok(())
}

/// Save the split history with per-level modularity
fn save_splits(partition: &Partition, original: &WeightedDigraph, output_dir: &str) -> Result<()> {
    log::info!("Saving split history");

    let path = Path::new(output_dir).join("splits.json");
    let mut file = File::create(path)?;

    let splits = json!({
        "splits": partition.splits.iter().enumerate().map(|(i, split)| {
            json!({
                "level": i + 1,
                "src": original.label(split.src),
                "dest": original.label(split.dest),
                "betweenness": split.score,
                "removed": split.removed.iter()
                    .map(|&(a, b)| [original.label(a), original.label(b)])
                    .collect::<Vec<_>>(),
                "component_count": split.component_count,
                "modularity": modularity(original, &split.membership),
            })
        }).collect::<Vec<_>>()
    });

    file.write_all(to_string_pretty(&splits)?.as_bytes())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::girvan_newman;

    #[test]
    fn writes_all_result_files() {
        let original = WeightedDigraph::from_edges(
            4,
            [(0, 1, 1.0), (1, 0, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 2, 1.0)],
        )
        .unwrap();
        let partition = girvan_newman(&mut original.clone()).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results");
        let out = out.to_str().unwrap();
        save_results(&partition, &original, out).unwrap();

        let summary_json = fs::read_to_string(Path::new(out).join("summary.json")).unwrap();
        let summary: serde_json::Value = serde_json::from_str(&summary_json).unwrap();
        assert_eq!(summary["graph_stats"]["vertex_count"], 4);
        assert_eq!(summary["graph_stats"]["edge_count"], 5);
        assert_eq!(summary["best_level"]["level"], 1);

        let splits_json = fs::read_to_string(Path::new(out).join("splits.json")).unwrap();
        let splits: serde_json::Value = serde_json::from_str(&splits_json).unwrap();
        assert_eq!(splits["splits"][0]["src"], "1");
        assert_eq!(splits["splits"][0]["dest"], "2");

        assert!(Path::new(out).join("dendrogram.json").exists());
    }

    #[test]
    fn saves_splits_recorded_before_a_failed_run() {
        // The second pair has no anchor once the root is split
        let original = WeightedDigraph::from_edges(4, [(0, 1, 1.0), (2, 3, 1.0)]).unwrap();
        let incomplete = girvan_newman(&mut original.clone()).unwrap_err();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().to_str().unwrap();
        save_results(&incomplete.partial, &original, out).unwrap();

        let splits_json = fs::read_to_string(Path::new(out).join("splits.json")).unwrap();
        let splits: serde_json::Value = serde_json::from_str(&splits_json).unwrap();
        assert_eq!(splits["splits"].as_array().map(Vec::len), Some(1));
        assert_eq!(splits["splits"][0]["src"], "0");
        assert_eq!(splits["splits"][0]["dest"], "1");
    }
}
