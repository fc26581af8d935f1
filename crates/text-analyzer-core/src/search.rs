//! Case-insensitive substring search with context windows.
//!
//! Matching folds ASCII letters only, so `"RUST"` finds `"rust"` but `"É"`
//! does not find `"é"`. Because ASCII folding never changes a character's
//! width, match offsets in the folded and original text are identical and
//! context is always cut from the original text.
//!
//! Overlapping matches are all reported: searching `"aa"` in `"aaa"` finds
//! two occurrences, at positions 0 and 1.

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

/// Characters of context shown on each side of a match.
pub const DEFAULT_CONTEXT_CHARS: usize = 20;

/// Marker added where a context window was cut short of the text boundary.
const ELLIPSIS: &str = "...";

/// A single match and the text around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Character offset of the match start in the original text.
    pub position: usize,
    /// Text preceding the match, prefixed with `...` when clipped.
    pub context_before: String,
    /// The matched span exactly as it appears in the original text.
    pub matched: String,
    /// Text following the match, suffixed with `...` when clipped.
    pub context_after: String,
    /// Whether the window stops before the start of the text.
    pub clipped_before: bool,
    /// Whether the window stops before the end of the text.
    pub clipped_after: bool,
}

/// All matches of a term in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The term as supplied by the caller.
    pub term: String,
    /// Number of matches, overlapping ones included.
    pub total_count: usize,
    /// Every match in order of position.
    pub occurrences: Vec<Occurrence>,
}

impl SearchResult {
    /// Character offsets of every match.
    pub fn positions(&self) -> Vec<usize> {
        self.occurrences.iter().map(|o| o.position).collect()
    }
}

/// Search `text` for `term` with the default context width.
///
/// See [`search_with_context`].
pub fn search(text: &str, term: &str) -> AnalysisResult<SearchResult> {
    search_with_context(text, term, DEFAULT_CONTEXT_CHARS)
}

/// Search `text` for every (possibly overlapping) case-insensitive
/// occurrence of `term`.
///
/// Each occurrence carries up to `context_chars` characters of the original
/// text on either side of the match.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidArgument`] if `term` is empty.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn search_with_context(
    text: &str,
    term: &str,
    context_chars: usize,
) -> AnalysisResult<SearchResult> {
    if term.is_empty() {
        return Err(AnalysisError::InvalidArgument(
            "search term must not be empty".to_string(),
        ));
    }

    let matcher = AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build([term])
        .map_err(|e| AnalysisError::InvalidArgument(format!("unusable search term: {e}")))?;

    // Byte offset of every char start, plus the end of the text, so char
    // positions map to slice bounds without rescanning.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_total = bounds.len() - 1;
    let char_at = |byte: usize| bounds.binary_search(&byte).unwrap_or_else(|i| i);

    let occurrences: Vec<Occurrence> = matcher
        .find_overlapping_iter(text)
        .map(|m| {
            let start = char_at(m.start());
            let end = char_at(m.end());

            let window_start = start.saturating_sub(context_chars);
            let window_end = end.saturating_add(context_chars).min(char_total);
            let clipped_before = window_start > 0;
            let clipped_after = window_end < char_total;

            let mut context_before = String::new();
            if clipped_before {
                context_before.push_str(ELLIPSIS);
            }
            context_before.push_str(&text[bounds[window_start]..m.start()]);

            let mut context_after = text[m.end()..bounds[window_end]].to_string();
            if clipped_after {
                context_after.push_str(ELLIPSIS);
            }

            Occurrence {
                position: start,
                context_before,
                matched: text[m.start()..m.end()].to_string(),
                context_after,
                clipped_before,
                clipped_after,
            }
        })
        .collect();

    tracing::debug!(matches = occurrences.len(), "search complete");

    Ok(SearchResult {
        term: term.to_string(),
        total_count: occurrences.len(),
        occurrences,
    })
}
