//! Word-frequency ranking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};
use crate::text;

/// A word and the number of times it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    /// Lowercased word.
    pub word: String,
    /// Occurrences in the text.
    pub count: usize,
}

/// Rank the most frequent words in `text`.
///
/// Letters are lowercased and every non-letter becomes a separator, then
/// single-character tokens are dropped. Results are ordered by descending
/// count; equal counts keep the order in which the words first appeared.
/// Returns at most `top_n` entries, and none when `top_n` is zero.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn rank_frequency(text: &str, top_n: usize) -> Vec<FrequencyEntry> {
    if top_n == 0 {
        return Vec::new();
    }

    let normalized = text::normalize_letters(text);

    // Insertion-ordered table: `slots` maps a word to its index in `ranked`.
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<(&str, usize)> = Vec::new();

    for word in text::split_words(&normalized).filter(|w| text::char_len(w) > 1) {
        match slots.get(word) {
            Some(&idx) => ranked[idx].1 += 1,
            None => {
                slots.insert(word, ranked.len());
                ranked.push((word, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among ties.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    tracing::debug!(distinct = slots.len(), returned = ranked.len(), "ranked words");

    ranked
        .into_iter()
        .map(|(word, count)| FrequencyEntry {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Parse a user-supplied ranking size.
///
/// Accepts a non-negative integer, surrounding whitespace allowed.
pub fn parse_top_n(input: &str) -> AnalysisResult<usize> {
    let trimmed = input.trim();
    trimmed.parse::<usize>().map_err(|_| {
        AnalysisError::InvalidArgument(format!(
            "expected a non-negative whole number of words, got {trimmed:?}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[FrequencyEntry]) -> Vec<(&str, usize)> {
        entries.iter().map(|e| (e.word.as_str(), e.count)).collect()
    }

    #[test]
    fn most_frequent_first_with_first_seen_ties() {
        let top = rank_frequency("the cat sat on the mat", 2);
        assert_eq!(pairs(&top), vec![("the", 2), ("cat", 1)]);
    }

    #[test]
    fn ties_keep_text_order() {
        let top = rank_frequency("zebra apple mango", 10);
        assert_eq!(
            pairs(&top),
            vec![("zebra", 1), ("apple", 1), ("mango", 1)]
        );
    }

    #[test]
    fn single_letters_are_dropped() {
        assert!(rank_frequency("a a a", 5).is_empty());
    }

    #[test]
    fn zero_requested_returns_nothing() {
        assert!(rank_frequency("plenty of words here", 0).is_empty());
    }

    #[test]
    fn fewer_words_than_requested() {
        let top = rank_frequency("hello hello world", 10);
        assert_eq!(pairs(&top), vec![("hello", 2), ("world", 1)]);
    }

    #[test]
    fn case_and_punctuation_are_normalized() {
        let top = rank_frequency("Rust! rust, RUST; rusty.", 5);
        assert_eq!(pairs(&top), vec![("rust", 3), ("rusty", 1)]);
    }

    #[test]
    fn contractions_split_on_apostrophe() {
        let top = rank_frequency("don't won't don't", 5);
        // The "t" fragments are single letters and disappear.
        assert_eq!(pairs(&top), vec![("don", 2), ("won", 1)]);
    }

    #[test]
    fn digits_act_as_separators() {
        let top = rank_frequency("abc123abc 42", 5);
        assert_eq!(pairs(&top), vec![("abc", 2)]);
    }

    #[test]
    fn output_is_non_increasing() {
        let text = "one two two three three three four four four four";
        let top = rank_frequency(text, 10);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(top[0].word, "four");
    }

    #[test]
    fn empty_text() {
        assert!(rank_frequency("", 3).is_empty());
        assert!(rank_frequency("!!! 123 ...", 3).is_empty());
    }

    #[test]
    fn parse_top_n_accepts_whole_numbers() {
        assert_eq!(parse_top_n("5"), Ok(5));
        assert_eq!(parse_top_n(" 0 \n"), Ok(0));
    }

    #[test]
    fn parse_top_n_rejects_bad_input() {
        assert!(matches!(
            parse_top_n("-3"),
            Err(AnalysisError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_top_n("five"),
            Err(AnalysisError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_top_n(""),
            Err(AnalysisError::InvalidArgument(_))
        ));
    }
}
