//! Operations expressed as traversals: transform, prune, search, fold, project

use std::sync::Arc;

use super::walk::{breadth_first, pre_order};
use crate::model::{FlatNode, TreeNode};

/// Transform every node's `data`, pre-order; ids, metadata and shape are kept
pub fn map_tree<T, U, F>(node: &TreeNode<T>, mut f: F) -> TreeNode<U>
where
    F: FnMut(&T) -> U,
{
    map_node(node, &mut f)
}

fn map_node<T, U, F>(node: &TreeNode<T>, f: &mut F) -> TreeNode<U>
where
    F: FnMut(&T) -> U,
{
    let data = f(&node.data);
    let children = node
        .children
        .iter()
        .map(|child| Arc::new(map_node(child, f)))
        .collect();
    TreeNode {
        id: node.id.clone(),
        data,
        children,
        metadata: node.metadata.clone(),
    }
}

/// Prune a tree down to the nodes matching `predicate` and their ancestors
///
/// The predicate sees each node once, pre-order. A node survives when it
/// matches or when any of its descendants survives; `None` means nothing
/// survived. Subtrees that come through untouched are shared with the input.
pub fn filter_tree<T, P>(node: &TreeNode<T>, mut predicate: P) -> Option<TreeNode<T>>
where
    T: Clone,
    P: FnMut(&TreeNode<T>) -> bool,
{
    match filter_node(node, &mut predicate)? {
        Kept::Whole => Some(node.clone()),
        Kept::Pruned(pruned) => Some(pruned),
    }
}

enum Kept<T> {
    Whole,
    Pruned(TreeNode<T>),
}

fn filter_node<T, P>(node: &TreeNode<T>, predicate: &mut P) -> Option<Kept<T>>
where
    T: Clone,
    P: FnMut(&TreeNode<T>) -> bool,
{
    let matched = predicate(node);
    let mut children = Vec::with_capacity(node.children.len());
    let mut pruned = false;

    for child in &node.children {
        match filter_node(child, predicate) {
            Some(Kept::Whole) => children.push(Arc::clone(child)),
            Some(Kept::Pruned(kept)) => {
                pruned = true;
                children.push(Arc::new(kept));
            }
            None => pruned = true,
        }
    }

    if !matched && children.is_empty() {
        return None;
    }
    if pruned {
        Some(Kept::Pruned(node.with_children(children)))
    } else {
        Some(Kept::Whole)
    }
}

/// First node, pre-order, satisfying `predicate`
pub fn find_in_tree<T, P>(node: &TreeNode<T>, mut predicate: P) -> Option<&TreeNode<T>>
where
    P: FnMut(&TreeNode<T>) -> bool,
{
    pre_order(node).map(|step| step.node).find(|n| predicate(*n))
}

/// Pre-order fold; the reducer also receives the node's id path
pub fn reduce_tree<T, A, F>(node: &TreeNode<T>, initial: A, mut reducer: F) -> A
where
    F: FnMut(A, &TreeNode<T>, &[&str]) -> A,
{
    pre_order(node).fold(initial, |acc, step| reducer(acc, step.node, &step.path))
}

/// One [`FlatNode`] per node, pre-order, root first
pub fn flatten_tree<T: Clone>(node: &TreeNode<T>) -> Vec<FlatNode<T>> {
    pre_order(node)
        .map(|step| {
            let parent_id = step
                .path
                .len()
                .checked_sub(2)
                .map(|i| step.path[i].to_string());
            FlatNode {
                id: step.node.id.clone(),
                data: step.node.data.clone(),
                path: step.path.iter().map(|id| id.to_string()).collect(),
                depth: step.node.metadata.depth,
                parent_id,
                has_children: step.node.has_children(),
                child_count: step.node.children.len(),
            }
        })
        .collect()
}

pub fn count_nodes<T>(node: &TreeNode<T>) -> usize {
    pre_order(node).count()
}

/// Largest stated `metadata.depth` anywhere in the tree
pub fn get_max_depth<T>(node: &TreeNode<T>) -> usize {
    pre_order(node)
        .map(|step| step.node.metadata.depth)
        .max()
        .unwrap_or(0)
}

/// Levels below `node`: 0 for a leaf
pub fn subtree_height<T>(node: &TreeNode<T>) -> usize {
    breadth_first(node).last().map_or(0, |step| step.depth)
}
