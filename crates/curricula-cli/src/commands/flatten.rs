//! Flatten command
//!
//! Usage: curricula flatten <FILE>

use clap::Args;
use curricula_core::traversal::flatten_tree;
use curricula_core::{log_op_end, log_op_error, log_op_start};
use curricula_core_types::RequestContext;
use std::path::PathBuf;
use std::time::Instant;

use super::{load_curriculum, to_output_json};
use crate::settings::CliSettings;

#[derive(Debug, Args)]
pub struct FlattenArgs {
    /// Curriculum JSON document
    pub file: PathBuf,
}

/// Execute flatten command
pub fn execute(
    args: FlattenArgs,
    settings: &CliSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    log_op_start!("cli_flatten", request_id = %ctx.request_id);
    let start = Instant::now();

    let (rendered, total_nodes) = load_curriculum("cli_flatten", &args.file, &ctx)
        .and_then(|curriculum| {
            let flat = flatten_tree(curriculum.root());
            let rendered = to_output_json("cli_flatten", &flat, settings.pretty_json, &ctx)?;
            Ok((rendered, flat.len()))
        })
        .map_err(|e| {
            log_op_error!("cli_flatten", e.clone(), duration_ms = start.elapsed().as_millis() as u64, request_id = %ctx.request_id);
            e
        })?;
    println!("{}", rendered);

    log_op_end!(
        "cli_flatten",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        total_nodes = total_nodes
    );
    Ok(())
}
