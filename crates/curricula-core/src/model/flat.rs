use serde::{Deserialize, Serialize};

use super::node::TreePath;

/// Denormalized projection of a node, used for list rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatNode<T> {
    pub id: String,
    pub data: T,
    /// Ancestor ids from the root down to this node, inclusive
    pub path: TreePath,
    pub depth: usize,
    /// `None` for the root
    pub parent_id: Option<String>,
    pub has_children: bool,
    pub child_count: usize,
}
