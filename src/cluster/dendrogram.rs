//! Arena-backed binary dendrogram

use serde::{Deserialize, Serialize};

use crate::error::PartitionError;

/// Index of a node inside a `Dendrogram`
pub type NodeId = usize;

/// A dendrogram node: a vertex id (or `None` for the root) and up to two children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DendrogramNode {
    pub vertex: Option<usize>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl DendrogramNode {
    fn new(vertex: Option<usize>) -> Self {
        Self {
            vertex,
            left: None,
            right: None,
        }
    }

    /// Whether the node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Binary tree of graph splits.
///
/// Nodes live in one vector and refer to their children by index. Node 0 is
/// the root, which carries no vertex. Nodes are only ever appended and a node
/// is split at most once, so every non-root node has exactly one parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dendrogram {
    nodes: Vec<DendrogramNode>,
}

impl Default for Dendrogram {
    fn default() -> Self {
        Self::new()
    }
}

impl Dendrogram {
    /// Id of the root node
    pub const ROOT: NodeId = 0;

    /// Tree holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![DendrogramNode::new(None)],
        }
    }

    pub fn root(&self) -> &DendrogramNode {
        &self.nodes[Self::ROOT]
    }

    pub fn node(&self, id: NodeId) -> Option<&DendrogramNode> {
        self.nodes.get(id)
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root exists from construction
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Give the leaf `anchor` two children carrying `src` and `dest`
    pub fn attach(
        &mut self,
        anchor: NodeId,
        src: usize,
        dest: usize,
    ) -> Result<(NodeId, NodeId), PartitionError> {
        let node = &self.nodes[anchor];
        if !node.is_leaf() {
            return Err(PartitionError::AnchorOccupied {
                vertex: node.vertex,
                src,
                dest,
            });
        }

        let left = self.nodes.len();
        let right = left + 1;
        self.nodes.push(DendrogramNode::new(Some(src)));
        self.nodes.push(DendrogramNode::new(Some(dest)));
        self.nodes[anchor].left = Some(left);
        self.nodes[anchor].right = Some(right);
        Ok((left, right))
    }

    /// Node ids in pre-order (node, left subtree, right subtree)
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![Self::ROOT];
        while let Some(id) = stack.pop() {
            order.push(id);
            let node = &self.nodes[id];
            // Right first so the left subtree is visited first
            stack.extend(node.right);
            stack.extend(node.left);
        }
        order
    }

    /// First leaf in pre-order carrying `vertex`
    pub fn find_leaf(&self, vertex: usize) -> Option<NodeId> {
        self.pre_order().into_iter().find(|&id| {
            let node = &self.nodes[id];
            node.vertex == Some(vertex) && node.is_leaf()
        })
    }

    /// Vertex ids of the leaves in pre-order. A lone root yields nothing.
    pub fn leaves(&self) -> Vec<usize> {
        self.pre_order()
            .into_iter()
            .filter_map(|id| {
                let node = &self.nodes[id];
                if node.is_leaf() { node.vertex } else { None }
            })
            .collect()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Number of nodes that have been split, which is the number of splits
    pub fn split_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_leaf()).count()
    }

    /// Length of the longest root-to-leaf path in edges
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(Self::ROOT, 0)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }

    /// Check that the nodes form a tree rooted at `ROOT`: the root has no
    /// parent and every other node has exactly one and is reachable.
    pub fn validate(&self) -> bool {
        let mut parents = vec![0usize; self.nodes.len()];
        for node in &self.nodes {
            for child in [node.left, node.right].into_iter().flatten() {
                match parents.get_mut(child) {
                    Some(count) => *count += 1,
                    None => return false,
                }
            }
        }
        parents[Self::ROOT] == 0
            && parents.iter().skip(1).all(|&count| count == 1)
            && self.pre_order().len() == self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_is_a_lone_root() {
        let d = Dendrogram::new();
        assert_eq!(d.len(), 1);
        assert!(!d.is_empty());
        assert_eq!(d.root().vertex, None);
        assert!(d.root().is_leaf());
        assert!(d.leaves().is_empty());
        assert_eq!(d.depth(), 0);
        assert!(d.validate());
    }

    #[test]
    fn attach_grows_below_leaf() {
        let mut d = Dendrogram::new();
        let (left, right) = d.attach(Dendrogram::ROOT, 1, 2).unwrap();
        d.attach(left, 0, 1).unwrap();

        assert_eq!(d.node(right).and_then(|n| n.vertex), Some(2));
        assert_eq!(d.leaves(), vec![0, 1, 2]);
        assert_eq!(d.split_count(), 2);
        assert_eq!(d.depth(), 2);
        assert!(d.validate());
    }

    #[test]
    fn split_node_cannot_be_split_again() {
        let mut d = Dendrogram::new();
        d.attach(Dendrogram::ROOT, 1, 2).unwrap();
        assert_eq!(
            d.attach(Dendrogram::ROOT, 3, 4),
            Err(PartitionError::AnchorOccupied { vertex: None, src: 3, dest: 4 })
        );
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn find_leaf_skips_split_nodes() {
        let mut d = Dendrogram::new();
        let (left, _) = d.attach(Dendrogram::ROOT, 1, 2).unwrap();
        let (_, inner) = d.attach(left, 0, 1).unwrap();
        assert_eq!(d.find_leaf(1), Some(inner));
        assert_eq!(d.find_leaf(2), Some(2));
        assert_eq!(d.find_leaf(7), None);
    }
}
