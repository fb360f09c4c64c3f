use crate::errors::{Result, TreeError};
use crate::model::Tree;
use crate::rules::validate_tree;
use crate::traversal::pre_order;

use super::data::{CurriculumData, CurriculumKind};

/// [`validate_tree`], then kind checks for trees that bypassed the factories
///
/// The root must be a textbook and every node's kind must match its depth.
/// With depths already consistent, that also pins each child to the kind
/// below its parent.
///
/// # Errors
/// * `KindDepthMismatch` - A node's kind does not belong at its depth
/// * Any [`validate_tree`] finding
pub fn validate_curriculum(tree: &Tree<CurriculumData>) -> Result<()> {
    validate_tree(tree)?;

    let root = tree.root();
    if root.data.kind() != CurriculumKind::Textbook {
        return Err(kind_mismatch(&root.id, root.data.kind(), 0));
    }

    for step in pre_order(root) {
        let node = step.node;
        if node.data.kind().depth() != node.metadata.depth {
            return Err(kind_mismatch(&node.id, node.data.kind(), node.metadata.depth));
        }
    }
    Ok(())
}

fn kind_mismatch(node_id: &str, kind: CurriculumKind, depth: usize) -> TreeError {
    TreeError::KindDepthMismatch {
        node_id: node_id.to_string(),
        kind: kind.to_string(),
        depth,
    }
}
