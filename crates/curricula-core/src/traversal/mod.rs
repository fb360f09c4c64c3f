//! Traversal engine
//!
//! Three deterministic walk orders driven purely by each node's `children`
//! sequence, offered as iterators ([`pre_order`], [`post_order`],
//! [`breadth_first`]) and as callback traversals. The map/filter/find/reduce/
//! flatten family is built on top of them.

pub mod derived;
pub mod visit;
pub mod walk;

pub use derived::{
    count_nodes, filter_tree, find_in_tree, flatten_tree, get_max_depth, map_tree, reduce_tree,
    subtree_height,
};
pub use visit::{
    traverse_bfs, traverse_dfs, try_traverse_bfs, try_traverse_dfs, DfsOrder,
};
pub use walk::{breadth_first, post_order, pre_order, BreadthFirst, PostOrder, PreOrder, Visit};
