//! Hierarchical community detection with the Girvan-Newman algorithm
//!
//! The pipeline computes all-pairs shortest paths, scores edges by
//! betweenness, removes the most central edges and records each split of the
//! graph in a binary dendrogram.

pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod storage;

pub use anyhow::{anyhow, Result};

pub use cluster::{girvan_newman, Dendrogram, GirvanNewman, Partition, Split};
pub use config::{Config, TieRule};
pub use error::{GraphError, IncompletePartition, PartitionError};
pub use graph::{Graph, Neighbor, WeightedDigraph};
