//! Mutation boundary for [`Tree`]
//!
//! ## Logging Ownership
//!
//! These methods own lifecycle logging for tree mutations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! [`node_ops`](super::node_ops) uses only `tracing::debug!()`.

use std::time::Instant;

use super::node_ops;
use crate::errors::Result;
use crate::model::{Tree, TreeNode};
use crate::{log_op_end, log_op_error, log_op_start};

impl<T: Clone> Tree<T> {
    /// [`node_ops::insert_node`] on this tree's root
    ///
    /// # Returns
    /// The next version of the tree, or `None` when `parent_id` is missing
    ///
    /// # Errors
    /// * `DepthExceeded` - If the subtree would reach past `MAX_DEPTH`
    pub fn insert_node(&self, parent_id: &str, node: TreeNode<T>) -> Result<Option<Tree<T>>> {
        log_op_start!("insert_node", parent_id = parent_id, node_id = %node.id);
        let start = Instant::now();
        let node_id = node.id.clone();

        let new_root = node_ops::insert_node(self.root(), parent_id, node).map_err(|e| {
            log_op_error!(
                "insert_node",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                node_id = %node_id
            );
            e
        })?;

        let tree = new_root.map(|root| self.rebuilt(root));
        log_op_end!(
            "insert_node",
            duration_ms = start.elapsed().as_millis() as u64,
            found = tree.is_some()
        );
        Ok(tree)
    }

    /// [`node_ops::remove_node`] on this tree's root; always yields a new version
    pub fn remove_node(&self, id: &str) -> Tree<T> {
        log_op_start!("remove_node", node_id = id);
        let start = Instant::now();

        let tree = self.rebuilt(node_ops::remove_node(self.root(), id));
        log_op_end!(
            "remove_node",
            duration_ms = start.elapsed().as_millis() as u64,
            total_nodes = tree.total_nodes()
        );
        tree
    }

    /// [`node_ops::update_node`] on this tree's root
    pub fn update_node<F>(&self, id: &str, transform: F) -> Option<Tree<T>>
    where
        F: FnOnce(&T) -> T,
    {
        log_op_start!("update_node", node_id = id);
        let start = Instant::now();

        let tree = node_ops::update_node(self.root(), id, transform).map(|root| self.rebuilt(root));
        log_op_end!(
            "update_node",
            duration_ms = start.elapsed().as_millis() as u64,
            found = tree.is_some()
        );
        tree
    }

    /// [`node_ops::move_node`] on this tree's root
    ///
    /// # Errors
    /// * `IllegalMove` - If the move would detach the root or create a cycle
    /// * `DepthExceeded` - If the moved subtree would reach past `MAX_DEPTH`
    pub fn move_node(&self, node_id: &str, new_parent_id: &str) -> Result<Option<Tree<T>>> {
        log_op_start!("move_node", node_id = node_id, new_parent_id = new_parent_id);
        let start = Instant::now();

        let new_root = node_ops::move_node(self.root(), node_id, new_parent_id).map_err(|e| {
            log_op_error!(
                "move_node",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                node_id = node_id,
                new_parent_id = new_parent_id
            );
            e
        })?;

        let tree = new_root.map(|root| self.rebuilt(root));
        log_op_end!(
            "move_node",
            duration_ms = start.elapsed().as_millis() as u64,
            found = tree.is_some()
        );
        Ok(tree)
    }
}
