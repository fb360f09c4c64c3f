//! Search command
//!
//! Usage: curricula search <FILE> <KEYWORD> [--case-sensitive]

use clap::Args;
use curricula_core::{log_op_end, log_op_error, log_op_start};
use curricula_core_types::RequestContext;
use std::path::PathBuf;
use std::time::Instant;

use super::{load_curriculum, to_output_json};
use crate::settings::CliSettings;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Curriculum JSON document
    pub file: PathBuf,

    /// Keyword to look for
    pub keyword: String,

    /// Match case exactly (overrides `search_case_sensitive`)
    #[arg(long)]
    pub case_sensitive: bool,
}

/// Execute search command
///
/// Prints the hits as a JSON array in outline order; no hits is `[]`.
pub fn execute(args: SearchArgs, settings: &CliSettings) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = RequestContext::new();
    log_op_start!("cli_search", request_id = %ctx.request_id, keyword = %args.keyword);
    let start = Instant::now();

    let case_sensitive = args.case_sensitive || settings.search_case_sensitive;
    let (rendered, hits) = load_curriculum("cli_search", &args.file, &ctx)
        .and_then(|curriculum| {
            let hits = curriculum.search_with(&args.keyword, case_sensitive);
            let rendered = to_output_json("cli_search", &hits, settings.pretty_json, &ctx)?;
            Ok((rendered, hits.len()))
        })
        .map_err(|e| {
            log_op_error!("cli_search", e.clone(), duration_ms = start.elapsed().as_millis() as u64, request_id = %ctx.request_id);
            e
        })?;
    println!("{}", rendered);

    log_op_end!(
        "cli_search",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %ctx.request_id,
        hits = hits
    );
    Ok(())
}
