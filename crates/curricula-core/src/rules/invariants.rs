use std::collections::HashSet;

use crate::model::{TreeNode, MAX_DEPTH};
use crate::traversal::pre_order;

/// Find nodes whose stated depth disagrees with their position
///
/// Positions are measured from `root`'s own stated depth, so a subtree can be
/// checked in place.
///
/// Returns list of (node_id, expected, actual) tuples
pub fn find_depth_mismatches<T>(root: &TreeNode<T>) -> Vec<(String, usize, usize)> {
    let base = root.metadata.depth;
    pre_order(root)
        .filter_map(|step| {
            let expected = base + step.depth;
            let actual = step.node.metadata.depth;
            (expected != actual).then(|| (step.node.id.clone(), expected, actual))
        })
        .collect()
}

/// Find nodes stated deeper than `MAX_DEPTH`
///
/// Returns list of (node_id, depth) tuples
pub fn find_depth_overflows<T>(root: &TreeNode<T>) -> Vec<(String, usize)> {
    pre_order(root)
        .map(|step| step.node)
        .filter(|node| node.metadata.depth > MAX_DEPTH)
        .map(|node| (node.id.clone(), node.metadata.depth))
        .collect()
}

/// Find nodes whose `has_children`/`child_count` disagree with `children`
///
/// Returns list of (node_id, declared, actual) tuples
pub fn find_child_count_mismatches<T>(root: &TreeNode<T>) -> Vec<(String, usize, usize)> {
    pre_order(root)
        .map(|step| step.node)
        .filter(|node| {
            node.metadata.child_count != node.children.len()
                || node.metadata.has_children != node.has_children()
        })
        .map(|node| (node.id.clone(), node.metadata.child_count, node.children.len()))
        .collect()
}

/// Ids seen more than once, each reported at its first repeat, pre-order
pub fn find_duplicate_ids<T>(root: &TreeNode<T>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for step in pre_order(root) {
        let id = step.node.id.as_str();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id.to_string());
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::construction::create_tree_node;
    use crate::fixtures::{leaf, sample};
    use crate::model::NodeMetadataOverrides;

    #[test]
    fn test_sample_is_clean() {
        let root = sample();
        assert!(find_depth_mismatches(&root).is_empty());
        assert!(find_depth_overflows(&root).is_empty());
        assert!(find_child_count_mismatches(&root).is_empty());
        assert!(find_duplicate_ids(&root).is_empty());
    }

    #[test]
    fn test_finds_depth_mismatch() {
        let root = create_tree_node("root", "R".to_string(), vec![leaf("a", 1, 0), leaf("b", 3, 1)], None);
        assert_eq!(find_depth_mismatches(&root), vec![("b".to_string(), 1, 3)]);
    }

    #[test]
    fn test_subtree_checked_from_its_own_depth() {
        let root = sample();
        assert!(find_depth_mismatches(&root.children[0]).is_empty());
    }

    #[test]
    fn test_finds_overflow() {
        let deep = leaf("deep", MAX_DEPTH + 2, 0);
        assert_eq!(find_depth_overflows(&deep), vec![("deep".to_string(), MAX_DEPTH + 2)]);
    }

    #[test]
    fn test_finds_child_count_mismatch() {
        let mut root = sample();
        root.metadata.child_count = 7;
        assert_eq!(find_child_count_mismatches(&root), vec![("root".to_string(), 7, 2)]);

        let mut flagged = leaf("x", 0, 0);
        flagged.metadata.has_children = true;
        assert_eq!(find_child_count_mismatches(&flagged).len(), 1);
    }

    #[test]
    fn test_finds_duplicates_once() {
        let at = |d| Some(NodeMetadataOverrides::at(d, 0));
        let twin = create_tree_node("twin", "T".to_string(), vec![leaf("twin", 2, 0)], at(1));
        let root = create_tree_node("root", "R".to_string(), vec![twin, leaf("twin", 1, 1)], None);
        assert_eq!(find_duplicate_ids(&root), vec!["twin".to_string()]);
    }
}
