//! Error types for text-analyzer-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during text analysis.
///
/// None of these are fatal: an interactive caller reports the message and
/// carries on with the same text buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Readability needs at least one word and one sentence.
    #[error("not enough text to calculate readability")]
    InsufficientText,

    /// A caller-supplied parameter was malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input text is empty or whitespace only.
    #[error("no text in input")]
    EmptyInput,
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
