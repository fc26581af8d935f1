//! Top command: most common words.

use clap::Args;
use tracing::{debug, instrument};

use text_analyzer_core::{parse_top_n, rank_frequency};

use super::InputArgs;
use crate::render;

/// Arguments for the `top` subcommand.
#[derive(Args, Debug)]
pub struct TopArgs {
    /// Text to analyze.
    #[command(flatten)]
    pub input: InputArgs,

    /// How many words to show (default: config `top_words`, else 5).
    #[arg(short = 'n', long, allow_negative_numbers = true, value_parser = parse_count)]
    pub count: Option<usize>,
}

/// Clap value parser that reports bad counts the same way the shell does.
pub(crate) fn parse_count(s: &str) -> Result<usize, String> {
    parse_top_n(s).map_err(|e| e.to_string())
}

/// Rank the most common words.
#[instrument(name = "cmd_top", skip_all, fields(source = %args.input.source()))]
pub fn cmd_top(
    args: TopArgs,
    global_json: bool,
    config_top_words: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let count = args.count.unwrap_or(config_top_words);
    debug!(count, "executing top command");

    let content = args.input.load(max_input_bytes)?;
    let entries = rank_frequency(&content, count);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        render::write_top(&mut std::io::stdout().lock(), &entries)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_count_messages() {
        assert_eq!(parse_count("3"), Ok(3));
        assert!(parse_count("x").unwrap_err().contains("invalid argument"));
    }
}
