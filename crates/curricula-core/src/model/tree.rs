use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::metadata::{TreeMetadata, TreeMetadataOverrides};
use super::node::TreeNode;
use crate::construction::is_tree;
use crate::errors::{Result, TreeError};
use crate::traversal::{count_nodes, get_max_depth};

/// A rooted tree plus its envelope metadata
///
/// The envelope's derived counts are private to the engine: every path that
/// produces a `Tree` (construction, mutation, deserialization) recomputes them
/// from the root, so they cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "TreeRepr<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Tree<T> {
    root: Arc<TreeNode<T>>,
    metadata: TreeMetadata,
}

impl<T> Tree<T> {
    /// Wrap a root with fresh timestamps and version 1
    pub fn new(root: impl Into<Arc<TreeNode<T>>>) -> Self {
        Self::with_overrides(root, TreeMetadataOverrides::default())
    }

    pub fn with_overrides(
        root: impl Into<Arc<TreeNode<T>>>,
        overrides: TreeMetadataOverrides,
    ) -> Self {
        let root = root.into();
        let now = Utc::now();
        let created_at = overrides.created_at.unwrap_or(now);
        let metadata = TreeMetadata {
            total_nodes: count_nodes(&root),
            max_depth: get_max_depth(&root),
            created_at,
            updated_at: overrides.updated_at.unwrap_or(created_at),
            version: overrides.version.unwrap_or(1),
        };
        Self { root, metadata }
    }

    pub fn root(&self) -> &TreeNode<T> {
        &self.root
    }

    /// Shared handle to the root, for callers that keep versions side by side
    pub fn root_arc(&self) -> &Arc<TreeNode<T>> {
        &self.root
    }

    pub fn metadata(&self) -> &TreeMetadata {
        &self.metadata
    }

    pub fn total_nodes(&self) -> usize {
        self.metadata.total_nodes
    }

    pub fn max_depth(&self) -> usize {
        self.metadata.max_depth
    }

    pub fn version(&self) -> u64 {
        self.metadata.version
    }

    /// Next version of this tree around a new root
    ///
    /// Derived counts are recomputed, the version is bumped and `updated_at`
    /// refreshed; `created_at` carries over.
    pub(crate) fn rebuilt(&self, root: TreeNode<T>) -> Self {
        Self::with_overrides(
            root,
            TreeMetadataOverrides {
                created_at: Some(self.metadata.created_at),
                updated_at: Some(Utc::now()),
                version: Some(self.metadata.version + 1),
            },
        )
    }
}

impl<T: Serialize> Tree<T> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T: serde::de::DeserializeOwned> Tree<T> {
    /// Parse a tree from externally sourced JSON
    ///
    /// The raw value must pass the [`is_tree`] shape check before it is
    /// deserialized; the envelope counts are then recomputed from the root.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if !is_tree(&value) {
            return Err(TreeError::InvalidShape {
                reason: "expected {root: TreeNode, metadata} with string ids, array children and numeric depths"
                    .to_string(),
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Wire form of a tree; the stored counts are advisory only
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TreeRepr<T> {
    root: Arc<TreeNode<T>>,
    #[serde(default)]
    metadata: Option<TreeReprMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TreeReprMetadata {
    total_nodes: Option<usize>,
    max_depth: Option<usize>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    version: Option<u64>,
}

impl<T> From<TreeRepr<T>> for Tree<T> {
    fn from(repr: TreeRepr<T>) -> Self {
        let Some(stored) = repr.metadata else {
            return Tree::new(repr.root);
        };

        let tree = Tree::with_overrides(
            repr.root,
            TreeMetadataOverrides {
                created_at: stored.created_at,
                updated_at: stored.updated_at,
                version: stored.version,
            },
        );

        let stale_total = stored.total_nodes.is_some_and(|n| n != tree.total_nodes());
        let stale_depth = stored.max_depth.is_some_and(|d| d != tree.max_depth());
        if stale_total || stale_depth {
            tracing::warn!(
                stored_total_nodes = ?stored.total_nodes,
                total_nodes = tree.total_nodes(),
                stored_max_depth = ?stored.max_depth,
                max_depth = tree.max_depth(),
                "stored tree metadata was stale; recomputed from root"
            );
        }
        tree
    }
}
