//! Node and tree construction, plus runtime shape predicates
//!
//! Construction trusts the caller's stated depth: only the mutation engine,
//! which changes depths, enforces [`MAX_DEPTH`].

use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;

use crate::model::{
    NodeMetadata, NodeMetadataOverrides, Tree, TreeMetadataOverrides, TreeNode, MAX_DEPTH,
};

/// Build a node from its parts
///
/// `has_children`/`child_count` come from `children`; `depth` and `index`
/// default to 0 and both timestamps to now unless overridden. Children may be
/// passed as owned nodes or as shared `Arc`s from an existing tree.
///
/// ```
/// use curricula_core::construction::{create_leaf_node, create_tree_node};
/// use curricula_core::model::NodeMetadataOverrides;
///
/// let leaf = create_leaf_node("leaf", "Leaf", Some(NodeMetadataOverrides::at(1, 0)));
/// let root = create_tree_node("root", "Root", vec![leaf], None);
/// assert_eq!(root.metadata.child_count, 1);
/// assert_eq!(root.children[0].metadata.depth, 1);
/// ```
pub fn create_tree_node<T, C>(
    id: impl Into<String>,
    data: T,
    children: impl IntoIterator<Item = C>,
    overrides: Option<NodeMetadataOverrides>,
) -> TreeNode<T>
where
    C: Into<Arc<TreeNode<T>>>,
{
    let children: Vec<Arc<TreeNode<T>>> = children.into_iter().map(Into::into).collect();
    let overrides = overrides.unwrap_or_default();
    let now = Utc::now();

    let metadata = NodeMetadata {
        depth: overrides.depth.unwrap_or(0),
        index: overrides.index.unwrap_or(0),
        has_children: !children.is_empty(),
        child_count: children.len(),
        created_at: Some(overrides.created_at.unwrap_or(now)),
        updated_at: Some(overrides.updated_at.unwrap_or(now)),
        extensions: overrides.extensions.unwrap_or_default(),
    };

    TreeNode {
        id: id.into(),
        data,
        children,
        metadata,
    }
}

/// [`create_tree_node`] without children
pub fn create_leaf_node<T>(
    id: impl Into<String>,
    data: T,
    overrides: Option<NodeMetadataOverrides>,
) -> TreeNode<T> {
    create_tree_node(id, data, Vec::<TreeNode<T>>::new(), overrides)
}

/// Wrap a root into a [`Tree`], computing `total_nodes` and `max_depth`
pub fn create_tree<T>(
    root: impl Into<Arc<TreeNode<T>>>,
    overrides: Option<TreeMetadataOverrides>,
) -> Tree<T> {
    Tree::with_overrides(root, overrides.unwrap_or_default())
}

/// `0 <= depth <= MAX_DEPTH`
///
/// Takes a signed value so depths read from untrusted input can be checked
/// before conversion.
pub fn is_valid_depth(depth: i64) -> bool {
    (0..=MAX_DEPTH as i64).contains(&depth)
}

pub fn has_valid_depth<T>(node: &TreeNode<T>) -> bool {
    node.metadata.depth <= MAX_DEPTH
}

pub fn has_children<T>(node: &TreeNode<T>) -> bool {
    node.has_children()
}

pub fn is_leaf_node<T>(node: &TreeNode<T>) -> bool {
    node.is_leaf()
}

/// Shape check for an externally sourced node value
///
/// Verifies a string `id`, a non-null `data`, an array `children` and a
/// numeric `metadata.depth`, recursively for every child. It does not check
/// that derived metadata is consistent; see [`crate::rules::validation`].
pub fn is_tree_node(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    let id_ok = obj.get("id").is_some_and(Value::is_string);
    let data_ok = obj.get("data").is_some_and(|d| !d.is_null());
    let depth_ok = obj
        .get("metadata")
        .and_then(|m| m.get("depth"))
        .is_some_and(Value::is_number);
    let children = obj.get("children").and_then(Value::as_array);

    match children {
        Some(children) if id_ok && data_ok && depth_ok => children.iter().all(is_tree_node),
        _ => false,
    }
}

/// Shape check for an externally sourced tree value: a valid `root` node and,
/// if present, an object `metadata`
pub fn is_tree(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    let root_ok = obj.get("root").is_some_and(is_tree_node);
    let metadata_ok = obj.get("metadata").map_or(true, Value::is_object);
    root_ok && metadata_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(id: &str, depth: usize) -> TreeNode<String> {
        create_leaf_node(id, id.to_uppercase(), Some(NodeMetadataOverrides::at(depth, 0)))
    }

    #[test]
    fn test_create_tree_node_derives_child_stats() {
        let root = create_tree_node("root", "R".to_string(), vec![leaf("a", 1), leaf("b", 1)], None);

        assert!(root.metadata.has_children);
        assert_eq!(root.metadata.child_count, 2);
        assert_eq!(root.metadata.depth, 0);
        assert_eq!(root.metadata.index, 0);
        assert!(root.metadata.created_at.is_some());
        assert!(has_children(&root));
        assert!(!is_leaf_node(&root));
    }

    #[test]
    fn test_create_tree_node_trusts_stated_depth() {
        let deep = leaf("deep", 9);
        assert_eq!(deep.metadata.depth, 9);
        assert!(!has_valid_depth(&deep));
    }

    #[test]
    fn test_create_tree_counts_nodes_and_depth() {
        let mid = create_tree_node(
            "mid",
            "M".to_string(),
            vec![leaf("x", 2)],
            Some(NodeMetadataOverrides::at(1, 0)),
        );
        let tree = create_tree(create_tree_node("root", "R".to_string(), vec![mid], None), None);

        assert_eq!(tree.total_nodes(), 3);
        assert_eq!(tree.max_depth(), 2);
        assert_eq!(tree.version(), 1);
    }

    #[test]
    fn test_is_valid_depth_bounds() {
        assert!(is_valid_depth(0));
        assert!(is_valid_depth(MAX_DEPTH as i64));
        assert!(!is_valid_depth(-1));
        assert!(!is_valid_depth(MAX_DEPTH as i64 + 1));
    }

    #[test]
    fn test_is_tree_node_shape_checks() {
        let good = json!({
            "id": "root",
            "data": {"title": "T"},
            "children": [],
            "metadata": {"depth": 0}
        });
        assert!(is_tree_node(&good));

        let missing_children = json!({"id": "root", "data": 1, "metadata": {"depth": 0}});
        assert!(!is_tree_node(&missing_children));

        let null_data = json!({"id": "root", "data": null, "children": [], "metadata": {"depth": 0}});
        assert!(!is_tree_node(&null_data));

        let numeric_id = json!({"id": 7, "data": 1, "children": [], "metadata": {"depth": 0}});
        assert!(!is_tree_node(&numeric_id));

        let string_depth = json!({"id": "r", "data": 1, "children": [], "metadata": {"depth": "0"}});
        assert!(!is_tree_node(&string_depth));
    }

    #[test]
    fn test_is_tree_node_does_not_check_consistency() {
        // childCount disagrees with children; still a valid shape
        let value = json!({
            "id": "root",
            "data": 1,
            "children": [],
            "metadata": {"depth": 3, "childCount": 12}
        });
        assert!(is_tree_node(&value));
    }

    #[test]
    fn test_is_tree() {
        let node = json!({"id": "r", "data": 1, "children": [], "metadata": {"depth": 0}});
        assert!(is_tree(&json!({"root": node.clone(), "metadata": {"totalNodes": 1}})));
        assert!(is_tree(&json!({"root": node.clone()})));
        assert!(!is_tree(&json!({"root": node, "metadata": 3})));
        assert!(!is_tree(&json!({"metadata": {}})));
        assert!(!is_tree(&json!([1, 2])));
    }
}
