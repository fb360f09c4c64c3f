//! Typed identifiers for curriculum entities
//!
//! Ids are minted by the platform; they are accepted as-is, never parsed or
//! re-validated here.

use serde::{Deserialize, Serialize};

macro_rules! curriculum_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

curriculum_id!(TextbookId);
curriculum_id!(ChapterId);
curriculum_id!(LessonId);
curriculum_id!(TopicId);
curriculum_id!(
    /// The finest grain of content
    SubtopicId
);
