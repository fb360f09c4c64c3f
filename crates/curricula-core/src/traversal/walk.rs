use std::collections::VecDeque;

use crate::model::TreeNode;

/// One step of a walk
#[derive(Debug)]
pub struct Visit<'a, T> {
    pub node: &'a TreeNode<T>,
    /// Ids from the walk's starting node down to `node`, inclusive
    pub path: Vec<&'a str>,
    /// Distance from the walk's starting node (0 for the start itself)
    pub depth: usize,
}

impl<'a, T> Visit<'a, T> {
    fn new(node: &'a TreeNode<T>, path: Vec<&'a str>) -> Self {
        let depth = path.len() - 1;
        Self { node, path, depth }
    }
}

fn extend<'a>(path: &[&'a str], id: &'a str) -> Vec<&'a str> {
    let mut next = Vec::with_capacity(path.len() + 1);
    next.extend_from_slice(path);
    next.push(id);
    next
}

/// Depth-first walk visiting each node before its children
pub struct PreOrder<'a, T> {
    stack: Vec<(&'a TreeNode<T>, Vec<&'a str>)>,
}

pub fn pre_order<T>(root: &TreeNode<T>) -> PreOrder<'_, T> {
    PreOrder {
        stack: vec![(root, vec![root.id.as_str()])],
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = Visit<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, path) = self.stack.pop()?;
        // Reverse push keeps left-to-right order
        for child in node.children.iter().rev() {
            self.stack.push((child, extend(&path, &child.id)));
        }
        Some(Visit::new(node, path))
    }
}

/// Depth-first walk visiting each node after all of its children
pub struct PostOrder<'a, T> {
    stack: Vec<(&'a TreeNode<T>, Vec<&'a str>, bool)>,
}

pub fn post_order<T>(root: &TreeNode<T>) -> PostOrder<'_, T> {
    PostOrder {
        stack: vec![(root, vec![root.id.as_str()], false)],
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = Visit<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path, expanded)) = self.stack.pop() {
            if expanded {
                return Some(Visit::new(node, path));
            }
            let children: Vec<_> = node
                .children
                .iter()
                .rev()
                .map(|child| (child.as_ref(), extend(&path, &child.id), false))
                .collect();
            self.stack.push((node, path, true));
            self.stack.extend(children);
        }
        None
    }
}

/// Level-by-level walk: every node at depth d before any node at depth d+1
pub struct BreadthFirst<'a, T> {
    queue: VecDeque<(&'a TreeNode<T>, Vec<&'a str>)>,
}

pub fn breadth_first<T>(root: &TreeNode<T>) -> BreadthFirst<'_, T> {
    BreadthFirst {
        queue: VecDeque::from([(root, vec![root.id.as_str()])]),
    }
}

impl<'a, T> Iterator for BreadthFirst<'a, T> {
    type Item = Visit<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, path) = self.queue.pop_front()?;
        for child in &node.children {
            self.queue.push_back((child, extend(&path, &child.id)));
        }
        Some(Visit::new(node, path))
    }
}
