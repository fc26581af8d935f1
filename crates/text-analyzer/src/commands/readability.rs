//! Readability command: Flesch Reading Ease scoring.

use clap::Args;
use tracing::{debug, instrument};

use text_analyzer_core::{AnalysisError, estimate_readability};

use super::InputArgs;
use crate::render;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// Text to analyze.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Score readability using Flesch Reading Ease.
///
/// Text too short to score is reported, not treated as a failure.
#[instrument(name = "cmd_readability", skip_all, fields(source = %args.input.source()))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing readability command");

    let content = args.input.load(max_input_bytes)?;
    let report = match estimate_readability(&content) {
        Ok(report) => Some(report),
        Err(AnalysisError::InsufficientText) => {
            debug!("not enough text to score");
            None
        }
        Err(e) => return Err(e.into()),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::write_readability(&mut std::io::stdout().lock(), report.as_ref())?;
    }

    Ok(())
}
