//! Analyze command: several analyses in one pass.

use anyhow::Context;
use clap::Args;
use tracing::{debug, instrument};

use text_analyzer_core::analysis::{self, Check};

use super::InputArgs;
use super::top::parse_count;
use crate::render;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text to analyze.
    #[command(flatten)]
    pub input: InputArgs,

    /// Checks to run (comma-separated). Omit for all checks.
    #[arg(long, value_delimiter = ',', value_enum)]
    pub checks: Option<Vec<Check>>,

    /// How many words the frequency check shows.
    #[arg(short = 'n', long, allow_negative_numbers = true, value_parser = parse_count)]
    pub top: Option<usize>,
}

/// Run the selected analyses and print every section.
#[instrument(name = "cmd_analyze", skip_all, fields(source = %args.input.source()))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_checks: Option<&[Check]>,
    config_top_words: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let checks = args.checks.as_deref().or(config_checks);
    let top_n = args.top.unwrap_or(config_top_words);
    debug!(checks = ?checks, top_n, "executing analyze command");

    let content = args.input.load(max_input_bytes)?;
    let report = analysis::run_full_analysis(&content, checks, top_n)
        .with_context(|| format!("failed to analyze {}", args.input.source()))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut out = std::io::stdout().lock();
    if let Some(ref stats) = report.elements {
        render::write_stats(&mut out, stats)?;
    }
    if let Some(ref entries) = report.frequency {
        render::write_top(&mut out, entries)?;
    }
    if checks.is_none_or(|c| c.contains(&Check::Readability)) {
        render::write_readability(&mut out, report.readability.as_ref())?;
    }

    Ok(())
}
