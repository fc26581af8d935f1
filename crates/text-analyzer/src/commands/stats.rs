//! Stats command: character, word, and sentence counts.

use clap::Args;
use tracing::{debug, instrument};

use text_analyzer_core::count_elements;

use super::InputArgs;
use crate::render;

/// Arguments for the `stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Text to analyze.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Count characters, words, and sentences.
#[instrument(name = "cmd_stats", skip_all, fields(source = %args.input.source()))]
pub fn cmd_stats(
    args: StatsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing stats command");

    let content = args.input.load(max_input_bytes)?;
    let stats = count_elements(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render::write_stats(&mut std::io::stdout().lock(), &stats)?;
    }

    Ok(())
}
