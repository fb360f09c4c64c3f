use curricula_core_types::{RequestId, TraceId};
use thiserror::Error;

use crate::model::MAX_DEPTH;

/// Result type alias using TreeError
pub type Result<T> = std::result::Result<T, TreeError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (CLI, UI collaborators,
/// tests) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural
    InvalidInput,
    InvalidShape,
    NotFound,
    DepthExceeded,
    IllegalMove,
    DuplicateId,
    InvariantViolation,

    // Integration/IO
    Io,
    Serialization,
    Configuration,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidShape => "ERR_INVALID_SHAPE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DepthExceeded => "ERR_DEPTH_EXCEEDED",
            ExErrorKind::IllegalMove => "ERR_ILLEGAL_MOVE",
            ExErrorKind::DuplicateId => "ERR_DUPLICATE_ID",
            ExErrorKind::InvariantViolation => "ERR_INVARIANT_VIOLATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus context for debugging.
/// Built with the `with_*` methods:
///
/// ```
/// use curricula_core::errors::{ExError, ExErrorKind};
///
/// let err = ExError::new(ExErrorKind::NotFound)
///     .with_op("outline")
///     .with_node_id("chapter-9")
///     .with_message("no such chapter");
/// assert_eq!(err.code(), "ERR_NOT_FOUND");
/// ```
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    node_id: Option<String>,
    depth: Option<usize>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node_id: None,
            depth: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    pub fn with_node_id(mut self, id: impl Into<String>) -> Self {
        self.node_id = Some(id.into());
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn node_id(&self) -> Option<&str> {
        self.node_id.as_deref()
    }

    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(node_id) = &self.node_id {
            write!(f, " (node_id: {})", node_id)?;
        }
        if let Some(depth) = self.depth {
            write!(f, " (depth: {})", depth)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for tree and curriculum operations
///
/// "Not found" is deliberately absent: missing targets are reported as
/// `None` or an empty sequence by the query and mutation functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    /// Placing a node (or its deepest descendant) would exceed MAX_DEPTH
    #[error("Cannot place node {node_id} at depth {depth}: maximum depth is {max_depth}")]
    DepthExceeded {
        node_id: String,
        depth: usize,
        max_depth: usize,
    },

    #[error("Illegal move of node {node_id} under {new_parent_id}: {reason}")]
    IllegalMove {
        node_id: String,
        new_parent_id: String,
        reason: String,
    },

    /// Externally sourced value failed the structural predicates
    #[error("Invalid tree shape: {reason}")]
    InvalidShape { reason: String },

    #[error("Node {node_id} declares depth {actual}, expected {expected}")]
    DepthMismatch {
        node_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("Node {node_id} declares {declared} children but has {actual}")]
    ChildCountMismatch {
        node_id: String,
        declared: usize,
        actual: usize,
    },

    #[error("Duplicate node id: {node_id}")]
    DuplicateNodeId { node_id: String },

    #[error("Node {node_id} of kind {kind} cannot sit at depth {depth}")]
    KindDepthMismatch {
        node_id: String,
        kind: String,
        depth: usize,
    },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TreeError {
    pub(crate) fn depth_exceeded(node_id: impl Into<String>, depth: usize) -> Self {
        TreeError::DepthExceeded {
            node_id: node_id.into(),
            depth,
            max_depth: MAX_DEPTH,
        }
    }
}

impl From<TreeError> for ExError {
    fn from(err: TreeError) -> Self {
        let message = err.to_string();
        match err {
            TreeError::DepthExceeded { node_id, depth, .. } => {
                ExError::new(ExErrorKind::DepthExceeded)
                    .with_node_id(node_id)
                    .with_depth(depth)
                    .with_message(message)
            }

            TreeError::IllegalMove { node_id, .. } => ExError::new(ExErrorKind::IllegalMove)
                .with_node_id(node_id)
                .with_op("move_node")
                .with_message(message),

            TreeError::InvalidShape { .. } => {
                ExError::new(ExErrorKind::InvalidShape).with_message(message)
            }

            TreeError::DepthMismatch {
                node_id, actual, ..
            } => ExError::new(ExErrorKind::InvariantViolation)
                .with_node_id(node_id)
                .with_depth(actual)
                .with_message(message),

            TreeError::ChildCountMismatch { node_id, .. } => {
                ExError::new(ExErrorKind::InvariantViolation)
                    .with_node_id(node_id)
                    .with_message(message)
            }

            TreeError::DuplicateNodeId { node_id } => ExError::new(ExErrorKind::DuplicateId)
                .with_node_id(node_id)
                .with_message(message),

            TreeError::KindDepthMismatch { node_id, depth, .. } => {
                ExError::new(ExErrorKind::InvariantViolation)
                    .with_node_id(node_id)
                    .with_depth(depth)
                    .with_message(message)
            }

            TreeError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            TreeError::Internal { .. } => ExError::new(ExErrorKind::Internal).with_message(message),
        }
    }
}

impl From<serde_json::Error> for TreeError {
    fn from(err: serde_json::Error) -> Self {
        TreeError::Serialization {
            message: err.to_string(),
        }
    }
}
