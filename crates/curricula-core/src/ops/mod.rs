//! Copy-on-write mutation engine
//!
//! [`node_ops`] works on bare roots and returns new roots; `Tree` methods in
//! [`tree_ops`] wrap them, rebuild the envelope and own lifecycle logging.

pub mod node_ops;
pub mod tree_ops;

pub use node_ops::{insert_node, move_node, remove_node, update_node};
