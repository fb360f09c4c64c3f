//! Read-only lookups over a tree
//!
//! Missing targets are reported as `None` or an empty `Vec`, never as errors.
//! Lookups by id are pre-order and the first match wins; id uniqueness is
//! not checked here (see [`crate::rules::validation`]).

pub mod node_queries;

pub use node_queries::{
    find_by_id, find_by_path, get_ancestors, get_descendants, get_node_depth, get_parent,
    get_path, get_siblings,
};
pub(crate) use node_queries::{locate_chain, locate_positions};
