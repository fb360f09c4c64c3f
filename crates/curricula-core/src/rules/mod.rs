//! Deep structural checks beyond the shape predicates

pub mod invariants;
pub mod validation;

pub use validation::{validate_node, validate_tree};
