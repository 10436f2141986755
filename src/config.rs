//! Configuration management for the Girvan-Newman pipeline

use serde::{Deserialize, Serialize};

/// Filter applied while removing additional tied edges after a removal
/// that did not split the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieRule {
    /// Skip any candidate sharing the row or the column of the most recently
    /// removed edge (`i == src || j == dest`)
    #[default]
    RowAndColumn,

    /// Only skip edges that are no longer present in the graph
    ExactEdge,
}

impl TieRule {
    /// Whether candidate edge (i, j) may be removed after (src, dest)
    pub fn admits(self, i: usize, j: usize, src: usize, dest: usize) -> bool {
        match self {
            TieRule::RowAndColumn => i != src && j != dest,
            TieRule::ExactEdge => (i, j) != (src, dest),
        }
    }
}

/// Configuration for a Girvan-Newman run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tie-extension filter
    pub tie_rule: TieRule,

    /// Score edges on the rayon thread pool
    pub parallel: bool,

    /// Stop after this many recorded splits
    pub max_splits: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tie_rule: TieRule::RowAndColumn,
            parallel: true,
            max_splits: None,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(tie_rule: TieRule, parallel: bool, max_splits: Option<usize>) -> Self {
        Self {
            tie_rule,
            parallel,
            max_splits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_and_column_rejects_shared_endpoint() {
        let rule = TieRule::RowAndColumn;
        assert!(!rule.admits(0, 2, 0, 1));
        assert!(!rule.admits(2, 1, 0, 1));
        assert!(rule.admits(2, 3, 0, 1));
    }

    #[test]
    fn exact_edge_only_rejects_same_pair() {
        let rule = TieRule::ExactEdge;
        assert!(!rule.admits(0, 1, 0, 1));
        assert!(rule.admits(0, 2, 0, 1));
        assert!(rule.admits(2, 1, 0, 1));
    }
}
