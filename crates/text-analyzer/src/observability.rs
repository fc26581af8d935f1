//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr so stdout stays clean for command
//! output. When a log file or directory is configured, a JSON-lines copy
//! is written there through a non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const ENV_LOG_PATH: &str = "TEXT_ANALYZER_LOG_PATH";
const ENV_LOG_DIR: &str = "TEXT_ANALYZER_LOG_DIR";
const DEFAULT_LOG_FILE: &str = "text-analyzer.jsonl";

/// Where (if anywhere) file logs are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Full path of the JSONL log file, if file logging is enabled.
    pub log_file: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log file from the environment, falling back to the
    /// configured log directory.
    ///
    /// `TEXT_ANALYZER_LOG_PATH` wins over `TEXT_ANALYZER_LOG_DIR`, which
    /// wins over `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let log_file = env_path.or_else(|| {
            env_dir
                .or(config_dir)
                .map(|dir| dir.join(DEFAULT_LOG_FILE))
        });
        Self { log_file }
    }
}

/// Build the log filter from CLI flags.
///
/// `--quiet` forces `error`. `-v` and `-vv` select `debug` and `trace`.
/// Otherwise `RUST_LOG` applies, then the configured level.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    let forced = if quiet {
        Some("error")
    } else {
        match verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    };

    match forced {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    }
}

/// Install the global subscriber.
///
/// The returned guard must be held until exit so buffered file logs flush.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .boxed();

    let (file_layer, guard) = match config.log_file {
        Some(ref path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    Ok(guard)
}

fn file_writer(
    path: &Path,
) -> anyhow::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path has no file name: {}", path.display()))?;

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::from("/tmp/a.log")),
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/cfg")),
        );
        assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/a.log")));
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/tmp/env")),
            Some(PathBuf::from("/tmp/cfg")),
        );
        assert_eq!(
            cfg.log_file,
            Some(PathBuf::from("/tmp/env").join(DEFAULT_LOG_FILE))
        );
    }

    #[test]
    fn no_file_logging_by_default() {
        assert_eq!(ObservabilityConfig::resolve(None, None, None).log_file, None);
    }

    #[test]
    fn flags_force_levels() {
        assert_eq!(env_filter(true, 2, "info").to_string(), "error");
        assert_eq!(env_filter(false, 1, "info").to_string(), "debug");
        assert_eq!(env_filter(false, 3, "info").to_string(), "trace");
    }
}
