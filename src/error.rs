//! Error types for graph construction and partitioning

use crate::cluster::Partition;

/// Errors raised while building or mutating a graph
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GraphError {
    #[error("Vertex {vertex} out of range for graph with {count} vertices")]
    VertexOutOfRange { vertex: usize, count: usize },
    #[error("Invalid weight {weight} on edge {src} -> {dst}")]
    InvalidWeight { src: usize, dst: usize, weight: f64 },
    #[error("Self loop on vertex {0}")]
    SelfLoop(usize),
}

/// Dendrogram consistency failures detected during Girvan-Newman
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PartitionError {
    /// No leaf carries the representative vertex recorded for the split
    #[error("No dendrogram leaf for representative vertex {vertex} (split {src} -> {dest})")]
    AnchorNotFound { vertex: usize, src: usize, dest: usize },
    /// The attachment node already holds children
    #[error("Dendrogram node for {vertex:?} is already split (split {src} -> {dest})")]
    AnchorOccupied { vertex: Option<usize>, src: usize, dest: usize },
}

/// A Girvan-Newman run that stopped on a dendrogram failure.
///
/// `partial` holds every split recorded before the failing one, so callers
/// can still save or inspect it.
#[derive(Debug, thiserror::Error)]
#[error("Girvan-Newman stopped after {} recorded splits", .partial.splits.len())]
pub struct IncompletePartition {
    #[source]
    pub error: PartitionError,
    pub partial: Partition,
}
