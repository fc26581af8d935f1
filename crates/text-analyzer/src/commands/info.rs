//! Info command implementation

use clap::Args;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use text_analyzer_core::config::{Config, ConfigSources};
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    top_words: usize,
    context_chars: usize,
    checks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let checks = config
            .checks
            .as_deref()
            .unwrap_or(text_analyzer_core::Check::ALL)
            .iter()
            .map(ToString::to_string)
            .collect();
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            top_words: config.top_words(),
            context_chars: config.context_chars(),
            checks,
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!(
        "{} {}",
        package.name.if_supports_color(Stream::Stdout, |t| t.bold()),
        package.version.if_supports_color(Stream::Stdout, |t| t.green())
    );
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    print_field("License", package.license);
    print_field("Repository", package.repository);

    let cfg = &full_info.config;
    println!();
    println!(
        "{}",
        "Configuration".if_supports_color(Stream::Stdout, |t| t.bold())
    );
    print_field(
        "Config file",
        cfg.config_file.as_deref().unwrap_or("none loaded"),
    );
    print_field("Log level", &cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        print_field("Log directory", dir);
    }
    print_field("Top words", &cfg.top_words.to_string());
    print_field("Context chars", &cfg.context_chars.to_string());
    print_field("Analyze checks", &cfg.checks.join(", "));
    print_field(
        "Input limit",
        &cfg.max_input_bytes
            .map_or_else(|| "disabled".to_string(), |b| format!("{b} bytes")),
    );

    Ok(())
}

/// Print a dimmed label and its value, skipping empty values.
fn print_field(label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    println!(
        "{}: {}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed()),
        value
    );
}
