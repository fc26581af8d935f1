//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier to read. Roughly 90-100 reads at a 5th-grade level,
//! 60-70 at 8th-9th grade, and below 30 at college-graduate level.
//!
//! Syllables come from a vowel-group heuristic rather than a dictionary, so
//! scores are approximate.

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::text;

/// Reading-level band derived from a Flesch Reading Ease score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingLevel {
    /// 90 and above.
    VeryEasy,
    /// 80 to below 90.
    Easy,
    /// 70 to below 80.
    FairlyEasy,
    /// 60 to below 70.
    Standard,
    /// 50 to below 60.
    FairlyDifficult,
    /// 30 to below 50.
    Difficult,
    /// Below 30.
    VeryDifficult,
}

impl ReadingLevel {
    /// Band for a Flesch Reading Ease score. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 90.0 => Self::VeryEasy,
            s if s >= 80.0 => Self::Easy,
            s if s >= 70.0 => Self::FairlyEasy,
            s if s >= 60.0 => Self::Standard,
            s if s >= 50.0 => Self::FairlyDifficult,
            s if s >= 30.0 => Self::Difficult,
            _ => Self::VeryDifficult,
        }
    }

    /// Human-readable label with the approximate school grade.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy (5th grade)",
            Self::Easy => "Easy (6th grade)",
            Self::FairlyEasy => "Fairly Easy (7th grade)",
            Self::Standard => "Standard (8th-9th grade)",
            Self::FairlyDifficult => "Fairly Difficult (10th-12th grade)",
            Self::Difficult => "Difficult (College)",
            Self::VeryDifficult => "Very Difficult (College Graduate)",
        }
    }
}

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Number of whitespace-separated words.
    pub word_count: usize,
    /// Approximate number of sentences.
    pub sentence_count: usize,
    /// Estimated total syllables.
    pub syllable_count: usize,
    /// Mean words per sentence.
    pub avg_words_per_sentence: f64,
    /// Mean syllables per word.
    pub avg_syllables_per_word: f64,
    /// Flesch Reading Ease score (unrounded).
    pub flesch_score: f64,
    /// Band the score falls into.
    pub level: ReadingLevel,
}

/// Estimate the readability of `text`.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientText`] when the text has no words.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn estimate_readability(text: &str) -> AnalysisResult<ReadabilityReport> {
    let (word_count, syllable_count) = text::split_words(text)
        .fold((0usize, 0usize), |(n, syl), w| (n + 1, syl + count_syllables(w)));
    let sentence_count = text::sentence_count(text, word_count);

    if word_count == 0 || sentence_count == 0 {
        return Err(AnalysisError::InsufficientText);
    }

    let avg_words_per_sentence = word_count as f64 / sentence_count as f64;
    let avg_syllables_per_word = syllable_count as f64 / word_count as f64;
    let flesch_score = 84.6f64.mul_add(
        -avg_syllables_per_word,
        1.015f64.mul_add(-avg_words_per_sentence, 206.835),
    );
    let level = ReadingLevel::from_score(flesch_score);

    tracing::debug!(flesch_score, level = level.label(), "scored readability");

    Ok(ReadabilityReport {
        word_count,
        sentence_count,
        syllable_count,
        avg_words_per_sentence,
        avg_syllables_per_word,
        flesch_score,
        level,
    })
}

/// Estimate syllables in a single word by counting vowel groups.
///
/// A trailing silent `e` is discounted (but not `-le`), and every word,
/// even one with no letters, counts as at least one syllable.
fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    let mut groups = 0usize;
    let mut prev_vowel = false;
    for ch in cleaned.chars() {
        let vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = vowel;
    }

    if cleaned.ends_with('e') && !cleaned.ends_with("le") {
        groups = groups.saturating_sub(1);
    }

    groups.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn short_simple_sentences() {
        let report = estimate_readability("The cat sat. The dog ran.").unwrap();
        assert_eq!(report.word_count, 6);
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.syllable_count, 6);
        assert!(approx(report.avg_words_per_sentence, 3.0));
        assert!(approx(report.avg_syllables_per_word, 1.0));
        assert!(approx(report.flesch_score, 119.19));
        assert_eq!(report.level, ReadingLevel::VeryEasy);
    }

    #[test]
    fn empty_input_is_insufficient() {
        assert_eq!(
            estimate_readability(""),
            Err(AnalysisError::InsufficientText)
        );
        assert_eq!(
            estimate_readability("  \n\t "),
            Err(AnalysisError::InsufficientText)
        );
    }

    #[test]
    fn unpunctuated_text_is_one_sentence() {
        let report = estimate_readability("hello there friend").unwrap();
        assert_eq!(report.sentence_count, 1);
        assert!(approx(report.avg_words_per_sentence, 3.0));
    }

    #[test]
    fn complex_prose_scores_low() {
        let text = "The implementation of the comprehensive organizational restructuring \
                    initiative necessitated the establishment of interdepartmental \
                    communication protocols that facilitated the dissemination of \
                    procedural documentation.";
        let report = estimate_readability(text).unwrap();
        assert!(report.flesch_score < 30.0);
        assert_eq!(report.level, ReadingLevel::VeryDifficult);
    }

    #[test]
    fn deterministic() {
        let text = "It was the best of times, it was the worst of times.";
        let a = estimate_readability(text).unwrap();
        let b = estimate_readability(text).unwrap();
        assert_eq!(a.flesch_score.to_bits(), b.flesch_score.to_bits());
    }

    #[test]
    fn syllables_count_vowel_groups() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("readability"), 5);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
    }

    #[test]
    fn silent_e_is_discounted() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("code"), 1);
        assert_eq!(count_syllables("the"), 1);
    }

    #[test]
    fn trailing_le_keeps_its_syllable() {
        assert_eq!(count_syllables("table"), 2);
        assert_eq!(count_syllables("simple"), 2);
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        assert_eq!(count_syllables("\"Hello,\""), 2);
        assert_eq!(count_syllables("MAKE!"), 1);
    }

    #[test]
    fn every_word_has_a_syllable() {
        assert_eq!(count_syllables("123"), 1);
        assert_eq!(count_syllables("--"), 1);
        assert_eq!(count_syllables("psst"), 1);
    }

    #[test]
    fn level_boundaries_are_inclusive() {
        assert_eq!(ReadingLevel::from_score(90.0), ReadingLevel::VeryEasy);
        assert_eq!(ReadingLevel::from_score(89.99), ReadingLevel::Easy);
        assert_eq!(ReadingLevel::from_score(80.0), ReadingLevel::Easy);
        assert_eq!(ReadingLevel::from_score(70.0), ReadingLevel::FairlyEasy);
        assert_eq!(ReadingLevel::from_score(60.0), ReadingLevel::Standard);
        assert_eq!(ReadingLevel::from_score(50.0), ReadingLevel::FairlyDifficult);
        assert_eq!(ReadingLevel::from_score(30.0), ReadingLevel::Difficult);
        assert_eq!(ReadingLevel::from_score(29.99), ReadingLevel::VeryDifficult);
        assert_eq!(ReadingLevel::from_score(-50.0), ReadingLevel::VeryDifficult);
    }

    #[test]
    fn labels() {
        assert_eq!(ReadingLevel::VeryEasy.label(), "Very Easy (5th grade)");
        assert_eq!(
            ReadingLevel::VeryDifficult.to_string(),
            "Very Difficult (College Graduate)"
        );
    }
}
