//! Subcommand implementations
//!
//! Each command runs inside a fresh [`RequestContext`]; its `request_id` is
//! attached to the lifecycle events and to any surfaced error.

use std::path::Path;

use curricula_core::errors::{ExError, ExErrorKind};
use curricula_core::{CurriculumTree, TreeError};
use curricula_core_types::RequestContext;
use serde::Serialize;

pub mod flatten;
pub mod outline;
pub mod path;
pub mod search;
pub mod stats;
pub mod validate;

/// Read a document from disk
pub(crate) fn read_document(
    op: &str,
    path: &Path,
    ctx: &RequestContext,
) -> Result<String, ExError> {
    std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op(op)
            .with_request_id(ctx.request_id.clone())
            .with_message(format!("cannot read {}: {}", path.display(), e))
    })
}

/// Read, shape-check and validate a curriculum document
pub(crate) fn load_curriculum(
    op: &str,
    path: &Path,
    ctx: &RequestContext,
) -> Result<CurriculumTree, ExError> {
    let json = read_document(op, path, ctx)?;
    CurriculumTree::from_json(&json).map_err(|e| tree_error(op, e, ctx))
}

pub(crate) fn tree_error(op: &str, err: TreeError, ctx: &RequestContext) -> ExError {
    ExError::from(err)
        .with_op(op)
        .with_request_id(ctx.request_id.clone())
}

/// Serialize `value` for stdout, honouring `pretty_json`
pub(crate) fn to_output_json<S: Serialize>(
    op: &str,
    value: &S,
    pretty: bool,
    ctx: &RequestContext,
) -> Result<String, ExError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(|e| tree_error(op, e.into(), ctx))
}
