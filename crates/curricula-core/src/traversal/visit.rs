//! Callback traversals
//!
//! The visitor receives `(node, path, depth)`. The `try_` forms stop at the
//! first `Err` the visitor returns and hand it back to the caller.

use super::walk::{breadth_first, post_order, pre_order, Visit};
use crate::model::TreeNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsOrder {
    #[default]
    Pre,
    Post,
}

pub fn traverse_dfs<T, F>(root: &TreeNode<T>, order: DfsOrder, mut visit: F)
where
    F: FnMut(&TreeNode<T>, &[&str], usize),
{
    match order {
        DfsOrder::Pre => {
            for step in pre_order(root) {
                visit(step.node, &step.path, step.depth);
            }
        }
        DfsOrder::Post => {
            for step in post_order(root) {
                visit(step.node, &step.path, step.depth);
            }
        }
    }
}

pub fn traverse_bfs<T, F>(root: &TreeNode<T>, mut visit: F)
where
    F: FnMut(&TreeNode<T>, &[&str], usize),
{
    for step in breadth_first(root) {
        visit(step.node, &step.path, step.depth);
    }
}

pub fn try_traverse_dfs<T, E, F>(root: &TreeNode<T>, order: DfsOrder, visit: F) -> Result<(), E>
where
    F: FnMut(&TreeNode<T>, &[&str], usize) -> Result<(), E>,
{
    match order {
        DfsOrder::Pre => drive(pre_order(root), visit),
        DfsOrder::Post => drive(post_order(root), visit),
    }
}

pub fn try_traverse_bfs<T, E, F>(root: &TreeNode<T>, visit: F) -> Result<(), E>
where
    F: FnMut(&TreeNode<T>, &[&str], usize) -> Result<(), E>,
{
    drive(breadth_first(root), visit)
}

fn drive<'a, T: 'a, E, F>(walk: impl Iterator<Item = Visit<'a, T>>, mut visit: F) -> Result<(), E>
where
    F: FnMut(&TreeNode<T>, &[&str], usize) -> Result<(), E>,
{
    for step in walk {
        visit(step.node, &step.path, step.depth)?;
    }
    Ok(())
}
