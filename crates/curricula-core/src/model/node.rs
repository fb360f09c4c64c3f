use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::metadata::NodeMetadata;

/// Deepest depth any node may occupy (textbook = 0 … subtopic = 4, one spare level)
pub const MAX_DEPTH: usize = 5;

/// Ids from the root down to a target node, both ends inclusive
pub type TreePath = Vec<String>;

/// An immutable tree node
///
/// Children are held behind `Arc` so that successive versions of a tree share
/// every subtree a mutation did not touch. Nothing in the engine mutates a
/// node after construction; operations return new nodes instead.
///
/// Id uniqueness within a tree is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode<T> {
    pub id: String,
    pub data: T,
    /// Sibling order is significant
    pub children: Vec<Arc<TreeNode<T>>>,
    pub metadata: NodeMetadata,
}

impl<T> TreeNode<T> {
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Depth as stated in the node's metadata
    pub fn depth(&self) -> usize {
        self.metadata.depth
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = &TreeNode<T>> {
        self.children.iter().map(|c| c.as_ref())
    }

    /// Same node with a replaced child list; child statistics are recomputed
    pub(crate) fn with_children(&self, children: Vec<Arc<TreeNode<T>>>) -> Self
    where
        T: Clone,
    {
        let mut metadata = self.metadata.clone();
        metadata.has_children = !children.is_empty();
        metadata.child_count = children.len();
        Self {
            id: self.id.clone(),
            data: self.data.clone(),
            children,
            metadata,
        }
    }
}
