//! Validate command
//!
//! Usage: curricula validate <FILE>
//!
//! Exits non-zero with the first violation found, carrying its stable code.

use clap::Args;
use curricula_core::curriculum::{validate_curriculum, CurriculumData};
use curricula_core::{log_op_end, log_op_error, log_op_start, Tree};
use curricula_core_types::RequestContext;
use std::path::PathBuf;
use std::time::Instant;

use super::{read_document, tree_error};
use crate::settings::CliSettings;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Curriculum JSON document
    pub file: PathBuf,
}

/// Execute validate command
pub fn execute(
    args: ValidateArgs,
    _settings: &CliSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    log_op_start!("cli_validate", request_id = %ctx.request_id);
    let start = Instant::now();

    let tree = read_document("cli_validate", &args.file, &ctx)
        .and_then(|json| {
            let tree = Tree::<CurriculumData>::from_json(&json)
                .map_err(|e| tree_error("cli_validate", e, &ctx))?;
            validate_curriculum(&tree).map_err(|e| tree_error("cli_validate", e, &ctx))?;
            Ok(tree)
        })
        .map_err(|e| {
            log_op_error!("cli_validate", e.clone(), duration_ms = start.elapsed().as_millis() as u64, request_id = %ctx.request_id);
            e
        })?;

    println!(
        "✓ Valid curriculum: {} ({} nodes, max depth {})",
        tree.root().data.title(),
        tree.total_nodes(),
        tree.max_depth()
    );

    log_op_end!(
        "cli_validate",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        total_nodes = tree.total_nodes()
    );
    Ok(())
}
