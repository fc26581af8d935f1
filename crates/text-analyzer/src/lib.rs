//! Library interface for the `text-analyzer` CLI.
//!
//! This crate exposes the CLI's argument parser, command implementations,
//! and the interactive shell as a library, primarily for testing. The
//! actual entry point is in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//! - [`render`] - Plain-text presentation of analysis results
//! - [`shell`] - The interactive menu loop

pub mod commands;
pub mod render;
pub mod shell;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                   Log filter (e.g., debug, text_analyzer=trace)
    TEXT_ANALYZER_LOG_PATH     Explicit log file path
    TEXT_ANALYZER_LOG_DIR      Log directory
    TEXT_ANALYZER_<FIELD>      Override any config field, e.g.
                               TEXT_ANALYZER_TOP_WORDS, TEXT_ANALYZER_CONTEXT_CHARS,
                               TEXT_ANALYZER_MAX_INPUT_BYTES
";

/// Command-line interface definition for text-analyzer.
#[derive(Parser)]
#[command(name = "text-analyzer")]
#[command(about = "Count, rank, search, and score the readability of text", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Count characters, words, and sentences
    Stats(commands::stats::StatsArgs),

    /// Show the most common words
    Top(commands::top::TopArgs),

    /// Find a word or phrase and show it in context
    Search(commands::search::SearchArgs),

    /// Score readability (Flesch Reading Ease)
    Readability(commands::readability::ReadabilityArgs),

    /// Run several analyses at once
    Analyze(commands::analyze::AnalyzeArgs),

    /// Start the interactive menu
    Interactive(commands::interactive::InteractiveArgs),

    /// Show package information
    Info(commands::info::InfoArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
