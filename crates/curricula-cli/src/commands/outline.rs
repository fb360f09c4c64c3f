//! Outline command
//!
//! Usage: curricula outline <FILE> [--output <FILE>]

use clap::Args;
use curricula_core::errors::{ExError, ExErrorKind};
use curricula_core::render::render_curriculum;
use curricula_core::{log_op_end, log_op_error, log_op_start};
use curricula_core_types::RequestContext;
use std::path::PathBuf;
use std::time::Instant;

use super::load_curriculum;
use crate::settings::CliSettings;

#[derive(Debug, Args)]
pub struct OutlineArgs {
    /// Curriculum JSON document
    pub file: PathBuf,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute outline command
pub fn execute(
    args: OutlineArgs,
    _settings: &CliSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    log_op_start!("cli_outline", request_id = %ctx.request_id);
    let start = Instant::now();

    load_curriculum("cli_outline", &args.file, &ctx)
        .and_then(|curriculum| {
            let markdown = render_curriculum(&curriculum);
            match &args.output {
                Some(output_path) => {
                    std::fs::write(output_path, markdown).map_err(|e| {
                        ExError::new(ExErrorKind::Io)
                            .with_op("cli_outline")
                            .with_request_id(ctx.request_id.clone())
                            .with_message(format!("cannot write {}: {}", output_path.display(), e))
                    })?;
                    println!("✓ Rendered to {}", output_path.display());
                }
                None => print!("{}", markdown),
            }
            Ok(())
        })
        .map_err(|e| {
            log_op_error!("cli_outline", e.clone(), duration_ms = start.elapsed().as_millis() as u64, request_id = %ctx.request_id);
            e
        })?;

    log_op_end!(
        "cli_outline",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id
    );
    Ok(())
}
