//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `text-analyzer.<ext>` in current directory or any parent
//! - `.text-analyzer.<ext>` in current directory or any parent
//! - `~/.config/text-analyzer/config.<ext>` (user config)
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! Environment variables prefixed with `TEXT_ANALYZER_` override every file,
//! e.g. `TEXT_ANALYZER_TOP_WORDS=10`.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use text_analyzer_core::config::ConfigLoader;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("top words: {}", config.top_words());
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::analysis::Check;
use crate::error::{ConfigError, ConfigResult};
use crate::search::DEFAULT_CONTEXT_CHARS;

/// Number of words the frequency ranking shows when nothing else is set.
pub const DEFAULT_TOP_WORDS: usize = 5;

/// The configuration for text-analyzer.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (no file logging if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// How many words the frequency ranking shows by default.
    pub top_words: Option<usize>,
    /// Characters of context shown on each side of a search match.
    pub context_chars: Option<usize>,
    /// Checks the `analyze` command runs when none are given. Omit for all.
    pub checks: Option<Vec<Check>>,
    /// Maximum input size in bytes (default: 5 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    ///
    /// When `true`, `max_input_bytes` is ignored and no size check is performed.
    #[serde(default)]
    pub disable_input_limit: bool,
}

impl Config {
    /// Configured ranking size, or [`DEFAULT_TOP_WORDS`].
    pub fn top_words(&self) -> usize {
        self.top_words.unwrap_or(DEFAULT_TOP_WORDS)
    }

    /// Configured search context width, or [`DEFAULT_CONTEXT_CHARS`].
    pub fn context_chars(&self) -> usize {
        self.context_chars.unwrap_or(DEFAULT_CONTEXT_CHARS)
    }

    /// Effective input size limit, `None` when the limit is disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(
                self.max_input_bytes
                    .unwrap_or(crate::DEFAULT_MAX_INPUT_BYTES),
            )
        }
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Directory name under the platform config dir, and the stem of project
/// config file names.
const APP_NAME: &str = "text-analyzer";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "TEXT_ANALYZER_";

/// Builder that discovers and merges configuration sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_config: bool,
    boundary: Option<String>,
    extra_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// A loader that reads user config and stops project search at `.git`.
    pub fn new() -> Self {
        Self {
            search_root: None,
            user_config: true,
            boundary: Some(".git".to_string()),
            extra_files: Vec::new(),
        }
    }

    /// Walk up from `path` looking for project config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Include or skip the per-user config file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Stop the upward search at the first directory containing `marker`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary = Some(marker.into());
        self
    }

    /// Search all the way to the filesystem root.
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary = None;
        self
    }

    /// Merge `path` after every discovered file. Repeatable; later calls win.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.extra_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge defaults, user config, project config, explicit files, and
    /// `TEXT_ANALYZER_*` variables, in that order of increasing precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when a source is malformed or a
    /// value has the wrong type.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = ConfigSources {
            user_file: self.user_config.then(find_user_config).flatten(),
            project_files: self
                .search_root
                .as_deref()
                .map(|root| self.project_configs(root))
                .unwrap_or_default(),
            explicit_files: self.extra_files,
        };

        let files = sources
            .user_file
            .iter()
            .chain(&sources.project_files)
            .chain(&sources.explicit_files);
        let figment = files
            .fold(
                Figment::from(Serialized::defaults(Config::default())),
                |fig, path| merge_file(fig, path),
            )
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(
            primary = ?sources.primary_file(),
            log_level = config.log_level.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Like [`load`](Self::load), but fails when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if no file was discovered or given.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let any_file = !self.extra_files.is_empty()
            || (self.user_config && find_user_config().is_some())
            || self
                .search_root
                .as_deref()
                .is_some_and(|root| !self.project_configs(root).is_empty());

        if any_file {
            self.load()
        } else {
            Err(ConfigError::NotFound)
        }
    }

    /// Config files in the nearest directory (from `start` upward) that has
    /// any, dotfiles first so plain names take precedence.
    fn project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        for dir in start.ancestors() {
            let found: Vec<Utf8PathBuf> = [format!(".{APP_NAME}"), APP_NAME.to_string()]
                .iter()
                .flat_map(|stem| {
                    CONFIG_EXTENSIONS
                        .iter()
                        .map(move |ext| dir.join(format!("{stem}.{ext}")))
                })
                .filter(|path| path.is_file())
                .collect();
            if !found.is_empty() {
                return found;
            }

            // A config beside the marker still counts; the marker only
            // stops the walk past its own directory.
            let at_boundary = self
                .boundary
                .as_ref()
                .is_some_and(|marker| dir != start && dir.join(marker).exists());
            if at_boundary {
                break;
            }
        }
        Vec::new()
    }
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    CONFIG_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

/// Merge one file, choosing the parser by extension (TOML otherwise).
fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("json") => figment.merge(Json::file_exact(path.as_str())),
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
        _ => figment.merge(Toml::file_exact(path.as_str())),
    }
}

/// Per-user config directory, e.g. `~/.config/text-analyzer/` on Linux.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
