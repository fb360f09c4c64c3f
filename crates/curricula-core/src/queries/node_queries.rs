use crate::model::{TreeNode, TreePath};
use crate::traversal::pre_order;

/// Child positions leading from `root` to the first pre-order node with `id`
///
/// Empty when `id` is the root itself.
pub(crate) fn locate_positions<T>(root: &TreeNode<T>, id: &str) -> Option<Vec<usize>> {
    let mut stack: Vec<(&TreeNode<T>, Vec<usize>)> = vec![(root, Vec::new())];

    while let Some((node, positions)) = stack.pop() {
        if node.id == id {
            return Some(positions);
        }
        for (i, child) in node.children.iter().enumerate().rev() {
            let mut next = positions.clone();
            next.push(i);
            stack.push((child, next));
        }
    }
    None
}

/// Nodes from `root` down to the node with `id`, both inclusive
pub(crate) fn locate_chain<'a, T>(root: &'a TreeNode<T>, id: &str) -> Option<Vec<&'a TreeNode<T>>> {
    let positions = locate_positions(root, id)?;
    let mut chain = Vec::with_capacity(positions.len() + 1);
    let mut current = root;
    chain.push(current);
    for i in positions {
        current = current.children[i].as_ref();
        chain.push(current);
    }
    Some(chain)
}

pub fn find_by_id<'a, T>(root: &'a TreeNode<T>, id: &str) -> Option<&'a TreeNode<T>> {
    pre_order(root).map(|step| step.node).find(|node| node.id == id)
}

/// Follow `path` from the root: the first id must be the root's, each next
/// one a direct child (in any position) of the node reached so far
///
/// ```
/// use curricula_core::construction::{create_leaf_node, create_tree_node};
/// use curricula_core::model::NodeMetadataOverrides;
/// use curricula_core::queries::find_by_path;
///
/// let leaf = create_leaf_node("b", 2, Some(NodeMetadataOverrides::at(1, 0)));
/// let root = create_tree_node("a", 1, vec![leaf], None);
///
/// assert_eq!(find_by_path(&root, &["a", "b"]).map(|n| n.data), Some(2));
/// assert!(find_by_path(&root, &["b"]).is_none());
/// ```
pub fn find_by_path<'a, T, S>(root: &'a TreeNode<T>, path: &[S]) -> Option<&'a TreeNode<T>>
where
    S: AsRef<str>,
{
    let (first, rest) = path.split_first()?;
    if root.id != first.as_ref() {
        return None;
    }

    let mut current = root;
    for segment in rest {
        let segment = segment.as_ref();
        current = current.child_nodes().find(|child| child.id == segment)?;
    }
    Some(current)
}

/// Nodes from the root down to, but excluding, the node with `id`
///
/// Empty when `id` is missing or names the root.
pub fn get_ancestors<'a, T>(root: &'a TreeNode<T>, id: &str) -> Vec<&'a TreeNode<T>> {
    let Some(mut chain) = locate_chain(root, id) else {
        return Vec::new();
    };
    chain.pop();
    chain
}

/// Every node strictly below `id` (or below the root when `id` is `None`),
/// pre-order
pub fn get_descendants<'a, T>(root: &'a TreeNode<T>, id: Option<&str>) -> Vec<&'a TreeNode<T>> {
    let start = match id {
        Some(id) => match find_by_id(root, id) {
            Some(node) => node,
            None => return Vec::new(),
        },
        None => root,
    };
    pre_order(start).skip(1).map(|step| step.node).collect()
}

/// The other children of the node's parent, in sibling order
pub fn get_siblings<'a, T>(root: &'a TreeNode<T>, id: &str) -> Vec<&'a TreeNode<T>> {
    match get_parent(root, id) {
        Some(parent) => parent.child_nodes().filter(|node| node.id != id).collect(),
        None => Vec::new(),
    }
}

pub fn get_parent<'a, T>(root: &'a TreeNode<T>, id: &str) -> Option<&'a TreeNode<T>> {
    let chain = locate_chain(root, id)?;
    chain.len().checked_sub(2).map(|i| chain[i])
}

/// Ids from the root down to the node with `id`, inclusive
pub fn get_path<T>(root: &TreeNode<T>, id: &str) -> Option<TreePath> {
    let chain = locate_chain(root, id)?;
    Some(chain.iter().map(|node| node.id.clone()).collect())
}

/// Depth from the node's position in the tree, not from its stated metadata
pub fn get_node_depth<T>(root: &TreeNode<T>, id: &str) -> Option<usize> {
    locate_positions(root, id).map(|positions| positions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample;

    fn ids<T>(nodes: &[&TreeNode<T>]) -> Vec<String> {
        nodes.iter().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_locate_positions() {
        let root = sample();
        assert_eq!(locate_positions(&root, "root"), Some(vec![]));
        assert_eq!(locate_positions(&root, "leaf2"), Some(vec![1, 0]));
        assert_eq!(locate_positions(&root, "ghost"), None);
    }

    #[test]
    fn test_find_by_id() {
        let root = sample();
        assert_eq!(find_by_id(&root, "leaf1").map(|n| n.data.as_str()), Some("LEAF1"));
        assert!(find_by_id(&root, "ghost").is_none());
    }

    #[test]
    fn test_find_by_path() {
        let root = sample();
        assert_eq!(find_by_path(&root, &["root", "child2", "leaf2"]).map(|n| n.id.as_str()), Some("leaf2"));
        assert_eq!(find_by_path(&root, &["root", "child1"]).map(|n| n.id.as_str()), Some("child1"));
        assert!(find_by_path(&root, &["root", "child1", "leaf2"]).is_none());
        assert!(find_by_path(&root, &["child1"]).is_none());
        assert!(find_by_path::<_, &str>(&root, &[]).is_none());

        let owned = vec!["root".to_string(), "child2".to_string()];
        assert!(find_by_path(&root, &owned).is_some());
    }

    #[test]
    fn test_get_ancestors() {
        let root = sample();
        assert_eq!(ids(&get_ancestors(&root, "leaf2")), ["root", "child2"]);
        assert!(get_ancestors(&root, "root").is_empty());
        assert!(get_ancestors(&root, "ghost").is_empty());
    }

    #[test]
    fn test_get_descendants() {
        let root = sample();
        assert_eq!(ids(&get_descendants(&root, None)), ["child1", "leaf1", "child2", "leaf2"]);
        assert_eq!(ids(&get_descendants(&root, Some("child2"))), ["leaf2"]);
        assert!(get_descendants(&root, Some("leaf1")).is_empty());
        assert!(get_descendants(&root, Some("ghost")).is_empty());
    }

    #[test]
    fn test_get_siblings() {
        let root = sample();
        assert_eq!(ids(&get_siblings(&root, "child1")), ["child2"]);
        assert!(get_siblings(&root, "leaf1").is_empty());
        assert!(get_siblings(&root, "root").is_empty());
        assert!(get_siblings(&root, "ghost").is_empty());
    }

    #[test]
    fn test_parent_path_depth() {
        let root = sample();
        assert_eq!(get_parent(&root, "leaf1").map(|n| n.id.as_str()), Some("child1"));
        assert!(get_parent(&root, "root").is_none());
        assert_eq!(get_path(&root, "leaf2"), Some(vec!["root".to_string(), "child2".to_string(), "leaf2".to_string()]));
        assert_eq!(get_node_depth(&root, "leaf2"), Some(2));
        assert_eq!(get_node_depth(&root, "ghost"), None);
    }
}
