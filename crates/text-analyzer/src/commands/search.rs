//! Search command: find a word or phrase and show it in context.

use anyhow::Context;
use clap::Args;
use tracing::{debug, instrument};

use text_analyzer_core::search_with_context;

use super::InputArgs;
use crate::render;

/// Arguments for the `search` subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Word or phrase to look for (case-insensitive).
    pub term: String,

    /// Text to search.
    #[command(flatten)]
    pub input: InputArgs,

    /// Characters of context on each side of a match (default: config, else 20).
    #[arg(long, value_name = "CHARS")]
    pub context: Option<usize>,
}

/// Search text for every occurrence of a term.
#[instrument(name = "cmd_search", skip_all, fields(source = %args.input.source()))]
pub fn cmd_search(
    args: SearchArgs,
    global_json: bool,
    config_context_chars: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let context_chars = args.context.unwrap_or(config_context_chars);
    debug!(term = %args.term, context_chars, "executing search command");

    let content = args.input.load(max_input_bytes)?;
    let result = search_with_context(&content, &args.term, context_chars)
        .with_context(|| format!("failed to search {}", args.input.source()))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render::write_search(&mut std::io::stdout().lock(), &result)?;
    }

    Ok(())
}
