//! Combined analysis report.
//!
//! Runs any subset of the independent analyses over the same text and
//! collects their results into a [`FullAnalysisReport`]. Each analysis is
//! still a pure function callers can invoke individually.

use serde::{Deserialize, Serialize};

use crate::elements::{ElementStats, count_elements};
use crate::error::{AnalysisError, AnalysisResult};
use crate::frequency::{FrequencyEntry, rank_frequency};
use crate::readability::{ReadabilityReport, estimate_readability};

/// An analysis that can be included in a full report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Check {
    /// Character, word, and sentence counts.
    Elements,
    /// Most common words.
    Frequency,
    /// Flesch Reading Ease.
    Readability,
}

impl Check {
    /// Every available check, in report order.
    pub const ALL: &'static [Self] = &[Self::Elements, Self::Frequency, Self::Readability];

    /// Returns the check name as used on the command line and in JSON.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Elements => "elements",
            Self::Frequency => "frequency",
            Self::Readability => "readability",
        }
    }
}

impl std::fmt::Display for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results of every requested check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysisReport {
    /// Character, word, and sentence counts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<ElementStats>,
    /// Most common words, most frequent first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Vec<FrequencyEntry>>,
    /// Readability, absent when skipped or when the text is too short.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readability: Option<ReadabilityReport>,
}

/// Run the requested checks over `text`.
///
/// # Arguments
///
/// * `text` - The text to analyze.
/// * `checks` - Checks to run. `None` runs all of them.
/// * `top_n` - How many words the frequency check returns.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] if `text` is blank.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn run_full_analysis(
    text: &str,
    checks: Option<&[Check]>,
    top_n: usize,
) -> AnalysisResult<FullAnalysisReport> {
    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let enabled = checks.unwrap_or(Check::ALL);

    let elements = enabled
        .contains(&Check::Elements)
        .then(|| count_elements(text));

    let frequency = enabled
        .contains(&Check::Frequency)
        .then(|| rank_frequency(text, top_n));

    let readability = if enabled.contains(&Check::Readability) {
        estimate_readability(text).ok()
    } else {
        None
    };

    Ok(FullAnalysisReport {
        elements,
        frequency,
        readability,
    })
}
