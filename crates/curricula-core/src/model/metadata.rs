use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Open extension fields carried alongside the fixed node metadata
///
/// Stores arbitrary JSON values so callers can attach presentation or
/// provenance hints without a schema change. Serialized inline with the
/// fixed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Extensions {
    data: BTreeMap<String, serde_json::Value>,
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.data.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.data.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<BTreeMap<String, serde_json::Value>> for Extensions {
    fn from(data: BTreeMap<String, serde_json::Value>) -> Self {
        Self { data }
    }
}

/// Per-node metadata
///
/// `has_children` and `child_count` are derived from the node's children and
/// recomputed whenever the engine builds a node. `depth` and `index` are
/// stated by the caller at construction and recomputed by insert/move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeMetadata {
    /// Number of ancestors; the root sits at 0
    pub depth: usize,
    /// Position among siblings, usually derived from a domain ordering field
    pub index: usize,
    pub has_children: bool,
    pub child_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extensions: Extensions,
}

/// Caller-supplied values that replace the construction defaults
#[derive(Debug, Clone, Default)]
pub struct NodeMetadataOverrides {
    pub depth: Option<usize>,
    pub index: Option<usize>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub extensions: Option<Extensions>,
}

impl NodeMetadataOverrides {
    /// Overrides placing a node at `depth`, position `index`
    pub fn at(depth: usize, index: usize) -> Self {
        Self {
            depth: Some(depth),
            index: Some(index),
            ..Self::default()
        }
    }

    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self.updated_at = Some(updated_at);
        self
    }

    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = Some(extensions);
        self
    }
}

/// Envelope metadata of a [`Tree`](super::Tree)
///
/// `total_nodes` and `max_depth` always describe the tree's current root; the
/// engine recomputes them every time a tree is built from a root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeMetadata {
    pub total_nodes: usize,
    pub max_depth: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub version: u64,
}

/// Caller-supplied envelope values; the derived counts cannot be overridden
#[derive(Debug, Clone, Default)]
pub struct TreeMetadataOverrides {
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub version: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extensions_set_get_remove() {
        let mut ext = Extensions::new();
        assert!(ext.is_empty());

        ext.set("color", json!("teal"));
        assert_eq!(ext.get("color"), Some(&json!("teal")));
        assert!(ext.contains_key("color"));
        assert_eq!(ext.len(), 1);

        assert_eq!(ext.remove("color"), Some(json!("teal")));
        assert!(ext.is_empty());
    }

    #[test]
    fn test_node_metadata_serializes_extensions_inline() {
        let mut metadata = NodeMetadata {
            depth: 1,
            index: 2,
            ..NodeMetadata::default()
        };
        metadata.extensions.set("pinned", json!(true));

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["depth"], json!(1));
        assert_eq!(value["hasChildren"], json!(false));
        assert_eq!(value["pinned"], json!(true));
        assert!(value.get("createdAt").is_none());

        let back: NodeMetadata = serde_json::from_value(value).unwrap();
        assert_eq!(back, metadata);
    }
}
