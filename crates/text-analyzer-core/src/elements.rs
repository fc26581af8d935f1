//! Character, word, and sentence counts.

use serde::{Deserialize, Serialize};

use crate::text;

/// Basic counts over a block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementStats {
    /// Total characters, whitespace included.
    pub char_count_with_spaces: usize,
    /// Characters other than the space character (tabs and newlines count).
    pub char_count_no_spaces: usize,
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Approximate sentence count from `.`, `!`, and `?`.
    pub sentence_count: usize,
    /// Mean word length in characters, absent when there are no words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_word_length: Option<f64>,
    /// Mean words per sentence, absent when there are no sentences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_sentence_length: Option<f64>,
}

/// Count characters, words, and sentences in `text`.
///
/// Never fails; empty text yields zero counts and no averages.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn count_elements(text: &str) -> ElementStats {
    let char_count_with_spaces = text::char_len(text);
    let char_count_no_spaces = text.chars().filter(|&c| c != ' ').count();

    let (word_count, letters) = text::split_words(text)
        .fold((0usize, 0usize), |(n, len), w| (n + 1, len + text::char_len(w)));

    let sentence_count = text::sentence_count(text, word_count);

    let avg_word_length = (word_count > 0).then(|| letters as f64 / word_count as f64);
    let avg_sentence_length =
        (sentence_count > 0).then(|| word_count as f64 / sentence_count as f64);

    tracing::debug!(word_count, sentence_count, "counted text elements");

    ElementStats {
        char_count_with_spaces,
        char_count_no_spaces,
        word_count,
        sentence_count,
        avg_word_length,
        avg_sentence_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_counts() {
        let stats = count_elements("Hello world. How are you?");
        assert_eq!(stats.word_count, 5);
        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.char_count_with_spaces, 25);
        assert_eq!(stats.char_count_no_spaces, 21);
        assert_eq!(stats.avg_sentence_length, Some(2.5));
        // "Hello" "world." "How" "are" "you?" = 5 + 6 + 3 + 3 + 4
        assert_eq!(stats.avg_word_length, Some(21.0 / 5.0));
    }

    #[test]
    fn empty_text_has_no_averages() {
        let stats = count_elements("");
        assert_eq!(stats.char_count_with_spaces, 0);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
        assert!(stats.avg_word_length.is_none());
        assert!(stats.avg_sentence_length.is_none());
    }

    #[test]
    fn whitespace_only_text() {
        let stats = count_elements("   \t\n");
        assert_eq!(stats.char_count_with_spaces, 5);
        // Only the literal space is excluded.
        assert_eq!(stats.char_count_no_spaces, 2);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.sentence_count, 0);
    }

    #[test]
    fn unpunctuated_text_is_one_sentence() {
        let stats = count_elements("just some words");
        assert_eq!(stats.sentence_count, 1);
        assert_eq!(stats.avg_sentence_length, Some(3.0));
    }

    #[test]
    fn punctuation_only_text_counts_each_mark() {
        let stats = count_elements("?!");
        assert_eq!(stats.word_count, 1);
        assert_eq!(stats.sentence_count, 2);
        assert_eq!(stats.avg_sentence_length, Some(0.5));
    }

    #[test]
    fn char_count_matches_length_for_multibyte_text() {
        let input = "Crème brûlée, s'il vous plaît.";
        let stats = count_elements(input);
        assert_eq!(stats.char_count_with_spaces, input.chars().count());
        assert!(stats.char_count_with_spaces < input.len());
    }

    #[test]
    fn serializes_without_absent_averages() {
        let json = serde_json::to_string(&count_elements("")).unwrap();
        assert!(!json.contains("avg_word_length"));
        assert!(json.contains("\"word_count\":0"));
    }
}
