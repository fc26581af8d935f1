//! Text processing utilities.
//!
//! Provides the word splitting, sentence-mark counting, and letter
//! normalization shared by the analysis modules.

/// Split text into words on runs of whitespace, discarding empty tokens.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Count sentence-ending punctuation (`.`, `!`, `?`).
///
/// Every mark counts, so `"Wait..."` contributes three.
pub fn count_sentence_marks(text: &str) -> usize {
    text.chars().filter(|&c| is_sentence_terminator(c)).count()
}

/// Approximate the number of sentences in `text`.
///
/// Text that has words but no terminating punctuation still counts as one
/// sentence.
pub fn sentence_count(text: &str, word_count: usize) -> usize {
    match count_sentence_marks(text) {
        0 if word_count > 0 => 1,
        n => n,
    }
}

/// Lowercase alphabetic characters and turn everything else into a space.
///
/// Whitespace survives as-is; digits, punctuation, and symbols become
/// separators, so `"don't"` normalizes to `"don t"`.
pub fn normalize_letters(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_alphabetic() {
            out.extend(ch.to_lowercase());
        } else if ch.is_whitespace() {
            out.push(ch);
        } else {
            out.push(' ');
        }
    }
    out
}

/// Length of `s` in characters (not bytes).
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}
