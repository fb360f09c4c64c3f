use crate::errors::{Result, TreeError};
use crate::model::{Tree, TreeNode};

use super::invariants;

/// Validate a subtree in place
///
/// Checks, in order:
///
/// 1. No stated depth exceeds `MAX_DEPTH`
/// 2. Each child sits exactly one level below its parent
/// 3. `has_children`/`child_count` agree with the children
/// 4. Ids are unique
///
/// # Errors
/// Returns the first violation found. For exhaustive reporting, call the
/// functions in [`invariants`] directly.
pub fn validate_node<T>(node: &TreeNode<T>) -> Result<()> {
    if let Some((node_id, depth)) = invariants::find_depth_overflows(node).into_iter().next() {
        return Err(TreeError::depth_exceeded(node_id, depth));
    }

    if let Some((node_id, expected, actual)) =
        invariants::find_depth_mismatches(node).into_iter().next()
    {
        return Err(TreeError::DepthMismatch {
            node_id,
            expected,
            actual,
        });
    }

    if let Some((node_id, declared, actual)) =
        invariants::find_child_count_mismatches(node).into_iter().next()
    {
        return Err(TreeError::ChildCountMismatch {
            node_id,
            declared,
            actual,
        });
    }

    if let Some(node_id) = invariants::find_duplicate_ids(node).into_iter().next() {
        return Err(TreeError::DuplicateNodeId { node_id });
    }

    Ok(())
}

/// Validate a whole tree: its root must sit at depth 0, then [`validate_node`]
///
/// The envelope's `total_nodes`/`max_depth` are not checked; they are always
/// recomputed when a `Tree` is built.
pub fn validate_tree<T>(tree: &Tree<T>) -> Result<()> {
    let root = tree.root();
    if root.metadata.depth != 0 {
        return Err(TreeError::DepthMismatch {
            node_id: root.id.clone(),
            expected: 0,
            actual: root.metadata.depth,
        });
    }
    validate_node(root)
}
