//! Node model: plain, serializable tree records

pub mod flat;
pub mod metadata;
pub mod node;
pub mod tree;

pub use flat::FlatNode;
pub use metadata::{Extensions, NodeMetadata, NodeMetadataOverrides, TreeMetadata, TreeMetadataOverrides};
pub use node::{TreeNode, TreePath, MAX_DEPTH};
pub use tree::Tree;
