use std::fmt::Display;

use crate::model::TreeNode;
use crate::traversal::pre_order;

/// Render any tree as an indented Markdown bullet list, pre-order
///
/// Each node is one `- {data}` line, indented two spaces per level below
/// `root`.
pub fn render_outline<T: Display>(root: &TreeNode<T>) -> String {
    let mut output = String::new();
    for step in pre_order(root) {
        output.push_str(&"  ".repeat(step.depth));
        output.push_str(&format!("- {}\n", step.node.data));
    }
    output
}
