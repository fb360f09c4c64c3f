//! Path command
//!
//! Usage: curricula path <FILE> <ID>

use clap::Args;
use curricula_core::errors::{ExError, ExErrorKind};
use curricula_core::{log_op_end, log_op_error, log_op_start};
use curricula_core_types::RequestContext;
use std::path::PathBuf;
use std::time::Instant;

use super::{load_curriculum, to_output_json};
use crate::settings::CliSettings;

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Curriculum JSON document
    pub file: PathBuf,

    /// Node id to locate
    pub id: String,
}

/// Execute path command
///
/// An unknown id is reported as `ERR_NOT_FOUND`.
pub fn execute(args: PathArgs, settings: &CliSettings) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    log_op_start!("cli_path", request_id = %ctx.request_id, node_id = %args.id);
    let start = Instant::now();

    let (rendered, path_len) = load_curriculum("cli_path", &args.file, &ctx)
        .and_then(|curriculum| {
            let breadcrumbs = curriculum.get_curriculum_path(&args.id).ok_or_else(|| {
                ExError::new(ExErrorKind::NotFound)
                    .with_op("cli_path")
                    .with_node_id(args.id.as_str())
                    .with_request_id(ctx.request_id.clone())
                    .with_message("no node with this id")
            })?;
            let rendered = to_output_json("cli_path", &breadcrumbs, settings.pretty_json, &ctx)?;
            Ok((rendered, breadcrumbs.len()))
        })
        .map_err(|e| {
            log_op_error!("cli_path", e.clone(), duration_ms = start.elapsed().as_millis() as u64, request_id = %ctx.request_id);
            e
        })?;
    println!("{}", rendered);

    log_op_end!(
        "cli_path",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        path_len = path_len
    );
    Ok(())
}
