//! Stats command
//!
//! Usage: curricula stats <FILE>

use clap::Args;
use curricula_core::{log_op_end, log_op_error, log_op_start};
use curricula_core_types::RequestContext;
use std::path::PathBuf;
use std::time::Instant;

use super::{load_curriculum, to_output_json};
use crate::settings::CliSettings;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Curriculum JSON document
    pub file: PathBuf,
}

/// Execute stats command
pub fn execute(args: StatsArgs, settings: &CliSettings) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    log_op_start!("cli_stats", request_id = %ctx.request_id);
    let start = Instant::now();

    let (rendered, total_nodes) = load_curriculum("cli_stats", &args.file, &ctx)
        .and_then(|curriculum| {
            let stats = curriculum.get_curriculum_stats();
            let rendered = to_output_json("cli_stats", &stats, settings.pretty_json, &ctx)?;
            Ok((rendered, stats.total_nodes))
        })
        .map_err(|e| {
            log_op_error!("cli_stats", e.clone(), duration_ms = start.elapsed().as_millis() as u64, request_id = %ctx.request_id);
            e
        })?;
    println!("{}", rendered);

    log_op_end!(
        "cli_stats",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        total_nodes = total_nodes
    );
    Ok(())
}
