use chrono::Utc;
use std::convert::Infallible;
use std::sync::Arc;

use crate::errors::{Result, TreeError};
use crate::model::{TreeNode, MAX_DEPTH};
use crate::queries::{locate_chain, locate_positions};
use crate::traversal::subtree_height;

/// Append `node` to the children of `parent_id`
///
/// The inserted subtree's depths are recomputed relative to the parent; its
/// `index` values are kept as given. Only the nodes on the path from the root
/// to the parent are rebuilt, every other subtree is shared with `root`.
///
/// # Returns
/// The new root, or `None` when `parent_id` is not in the tree
///
/// # Errors
/// * `DepthExceeded` - If parent depth + 1 + the subtree's height exceeds
///   `MAX_DEPTH`
pub fn insert_node<T: Clone>(
    root: &TreeNode<T>,
    parent_id: &str,
    node: TreeNode<T>,
) -> Result<Option<TreeNode<T>>> {
    let Some(positions) = locate_positions(root, parent_id) else {
        tracing::debug!(parent_id, "insert target not found");
        return Ok(None);
    };
    let parent = node_at(root, &positions);

    let depth = parent.metadata.depth + 1;
    let deepest = depth + subtree_height(&node);
    if deepest > MAX_DEPTH {
        return Err(TreeError::depth_exceeded(node.id, deepest));
    }

    let placed = Arc::new(redepth(&node, depth)?);
    tracing::debug!(
        parent_id,
        node_id = %node.id,
        depth,
        path_len = positions.len() + 2,
        "inserting node"
    );

    let new_root = rebuild_path(root, &positions, |parent| {
        let mut children = parent.children.clone();
        children.push(placed);
        Ok::<_, TreeError>(touched(parent.with_children(children)))
    })?;
    Ok(Some(new_root))
}

/// Drop the subtree rooted at `id` from its parent's children
///
/// Idempotent: a missing `id`, or the root's own id, yields an unchanged copy
/// of `root` that still shares all of its children.
pub fn remove_node<T: Clone>(root: &TreeNode<T>, id: &str) -> TreeNode<T> {
    let Some(positions) = locate_positions(root, id) else {
        tracing::debug!(node_id = id, "remove target not found");
        return root.clone();
    };
    let Some((&index, parent_positions)) = positions.split_last() else {
        tracing::debug!(node_id = id, "root cannot be removed");
        return root.clone();
    };

    tracing::debug!(node_id = id, depth = positions.len(), "removing subtree");
    let rebuilt: std::result::Result<_, Infallible> =
        rebuild_path(root, parent_positions, |parent| {
            let mut children = parent.children.clone();
            children.remove(index);
            Ok(touched(parent.with_children(children)))
        });
    match rebuilt {
        Ok(new_root) => new_root,
        Err(never) => match never {},
    }
}

/// Replace the data of `id` with `transform(old)`; children are untouched
///
/// # Returns
/// The new root, or `None` when `id` is not in the tree
pub fn update_node<T, F>(root: &TreeNode<T>, id: &str, transform: F) -> Option<TreeNode<T>>
where
    T: Clone,
    F: FnOnce(&T) -> T,
{
    let positions = locate_positions(root, id)?;
    tracing::debug!(node_id = id, depth = positions.len(), "updating node data");

    let rebuilt: std::result::Result<_, Infallible> = rebuild_path(root, &positions, |target| {
        Ok(touched(TreeNode {
            id: target.id.clone(),
            data: transform(&target.data),
            children: target.children.clone(),
            metadata: target.metadata.clone(),
        }))
    });
    match rebuilt {
        Ok(new_root) => Some(new_root),
        Err(never) => match never {},
    }
}

/// Detach the subtree at `node_id` and append it under `new_parent_id`
///
/// Equivalent to [`remove_node`] followed by [`insert_node`], with the moved
/// subtree's depths recomputed.
///
/// # Returns
/// The new root, or `None` when either id is not in the tree
///
/// # Errors
/// * `IllegalMove` - If `node_id` is the root, or `new_parent_id` is the node
///   itself or one of its descendants
/// * `DepthExceeded` - Under the same condition as [`insert_node`]
pub fn move_node<T: Clone>(
    root: &TreeNode<T>,
    node_id: &str,
    new_parent_id: &str,
) -> Result<Option<TreeNode<T>>> {
    let (Some(node_positions), Some(parent_positions)) = (
        locate_positions(root, node_id),
        locate_positions(root, new_parent_id),
    ) else {
        tracing::debug!(node_id, new_parent_id, "move endpoint not found");
        return Ok(None);
    };

    if node_positions.is_empty() {
        return Err(illegal_move(node_id, new_parent_id, "the root cannot be moved"));
    }
    if parent_positions.starts_with(&node_positions) {
        return Err(illegal_move(
            node_id,
            new_parent_id,
            "a node cannot be moved under itself or its own descendant",
        ));
    }

    let moving = node_at(root, &node_positions).clone();
    let detached = remove_node(root, node_id);
    let moved = insert_node(&detached, new_parent_id, moving)?;
    if moved.is_none() {
        return Err(TreeError::Internal {
            message: format!("parent {} vanished while moving {}", new_parent_id, node_id),
        });
    }
    Ok(moved)
}

fn illegal_move(node_id: &str, new_parent_id: &str, reason: &str) -> TreeError {
    TreeError::IllegalMove {
        node_id: node_id.to_string(),
        new_parent_id: new_parent_id.to_string(),
        reason: reason.to_string(),
    }
}

fn node_at<'a, T>(root: &'a TreeNode<T>, positions: &[usize]) -> &'a TreeNode<T> {
    positions
        .iter()
        .fold(root, |node, &i| node.children[i].as_ref())
}

fn touched<T>(mut node: TreeNode<T>) -> TreeNode<T> {
    node.metadata.updated_at = Some(Utc::now());
    node
}

/// Rebuild every node on `positions`, replacing the node at its end with
/// `edit(node)`; siblings off the path keep their `Arc`s
fn rebuild_path<T, E, F>(node: &TreeNode<T>, positions: &[usize], edit: F) -> std::result::Result<TreeNode<T>, E>
where
    T: Clone,
    F: FnOnce(&TreeNode<T>) -> std::result::Result<TreeNode<T>, E>,
{
    match positions.split_first() {
        None => edit(node),
        Some((&i, rest)) => {
            let replaced = rebuild_path(&node.children[i], rest, edit)?;
            let mut children = node.children.clone();
            children[i] = Arc::new(replaced);
            Ok(node.with_children(children))
        }
    }
}

/// Copy of `node` placed at `depth`, with every descendant re-levelled
fn redepth<T: Clone>(node: &TreeNode<T>, depth: usize) -> Result<TreeNode<T>> {
    if depth > MAX_DEPTH {
        return Err(TreeError::depth_exceeded(node.id.clone(), depth));
    }
    let children = node
        .children
        .iter()
        .map(|child| redepth(child, depth + 1).map(Arc::new))
        .collect::<Result<Vec<_>>>()?;

    let mut placed = node.with_children(children);
    placed.metadata.depth = depth;
    Ok(placed)
}
