//! Curricula Core - immutable, depth-bounded tree engine
//!
//! This crate provides:
//! - A generic node model with copy-on-write children (`Arc`-shared subtrees)
//! - Construction helpers and runtime shape predicates for external input
//! - Deterministic traversals (pre-order, post-order, breadth-first) and the
//!   map/filter/find/reduce/flatten family built on them
//! - Id and path queries
//! - A mutation engine that rebuilds only the root-to-target path and refuses
//!   to place any node deeper than [`MAX_DEPTH`]
//! - Deep validation of stated metadata
//! - The curriculum specialization (textbook → chapter → lesson → topic →
//!   subtopic) with typed factories, domain queries and Markdown rendering
//!
//! Missing targets are values (`None`, empty `Vec`); structural violations
//! are errors ([`TreeError`]).

pub mod construction;
pub mod curriculum;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod render;
pub mod rules;
pub mod traversal;

#[cfg(test)]
pub(crate) mod fixtures;

#[doc(hidden)]
pub use curricula_core_types as core_types;

// Re-export commonly used types
pub use construction::{create_leaf_node, create_tree, create_tree_node};
pub use curriculum::{CurriculumData, CurriculumKind, CurriculumTree};
pub use errors::{ExError, ExErrorKind, Result, TreeError};
pub use model::{FlatNode, NodeMetadata, Tree, TreeMetadata, TreeNode, TreePath, MAX_DEPTH};
pub use traversal::{DfsOrder, Visit};
