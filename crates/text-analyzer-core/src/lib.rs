//! Core library for text-analyzer.
//!
//! This crate provides the text-analysis functions used by the
//! `text-analyzer` CLI and any downstream consumers. Every analysis is a pure
//! function over a borrowed `&str`; the caller owns the text buffer.
//!
//! # Modules
//!
//! - [`elements`] - Character, word, and sentence counts
//! - [`frequency`] - Word-frequency ranking
//! - [`search`] - Case-insensitive substring search with context windows
//! - [`readability`] - Flesch Reading Ease estimation
//! - [`analysis`] - Combined report over several analyses
//! - [`markdown`] - Markdown-to-prose stripping
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use text_analyzer_core::{count_elements, rank_frequency};
//!
//! let stats = count_elements("Hello world. How are you?");
//! assert_eq!(stats.word_count, 5);
//!
//! let top = rank_frequency("the cat sat on the mat", 1);
//! assert_eq!(top[0].word, "the");
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod elements;
pub mod error;
pub mod frequency;
pub mod markdown;
pub mod readability;
pub mod search;
pub mod text;

pub use analysis::{Check, FullAnalysisReport, run_full_analysis};
pub use config::{Config, ConfigLoader, LogLevel};
pub use elements::{ElementStats, count_elements};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use frequency::{FrequencyEntry, parse_top_n, rank_frequency};
pub use readability::{ReadabilityReport, ReadingLevel, estimate_readability};
pub use search::{
    DEFAULT_CONTEXT_CHARS, Occurrence, SearchResult, search, search_with_context,
};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
