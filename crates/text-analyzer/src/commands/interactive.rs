//! Interactive command: the menu-driven shell.

use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use super::InputArgs;
use crate::shell::Session;

/// Arguments for the `interactive` subcommand.
#[derive(Args, Debug, Default)]
pub struct InteractiveArgs {
    /// Start with the contents of this file instead of prompting
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Start with this text instead of prompting
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Strip markdown from the starting text (automatic for `.md` files)
    #[arg(long)]
    pub strip_markdown: bool,
}

/// Run the interactive shell on standard input and output.
#[instrument(name = "cmd_interactive", skip_all)]
pub fn cmd_interactive(
    args: InteractiveArgs,
    context_chars: usize,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    // Standard input drives the menu, so it is never a text source here.
    let input = InputArgs {
        file: args.file,
        text: args.text,
        strip_markdown: args.strip_markdown,
    };
    let initial = input.load_without_stdin(max_input_bytes)?;
    debug!(preloaded = initial.is_some(), context_chars, "starting shell");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut session = Session::new(stdin, stdout, context_chars);
    if let Some(text) = initial {
        session = session.with_text(text);
    }
    session.run()?;
    Ok(())
}
