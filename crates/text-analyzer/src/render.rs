//! Plain-text presentation of analysis results.
//!
//! Shared by the one-shot subcommands and the interactive shell. Styling
//! goes through `if_supports_color`, so `--color never` and non-terminal
//! output get plain text.

use std::io::{self, Write};

use owo_colors::{OwoColorize, Stream};
use text_analyzer_core::{ElementStats, FrequencyEntry, ReadabilityReport, SearchResult};

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    let line = format!("----- {title} -----");
    writeln!(out, "\n{}", line.if_supports_color(Stream::Stdout, |t| t.bold()))
}

/// Write character, word, and sentence counts.
pub fn write_stats<W: Write>(out: &mut W, stats: &ElementStats) -> io::Result<()> {
    heading(out, "Text Statistics")?;
    writeln!(
        out,
        "Total characters (with spaces): {}",
        stats.char_count_with_spaces
    )?;
    writeln!(
        out,
        "Total characters (without spaces): {}",
        stats.char_count_no_spaces
    )?;
    writeln!(out, "Total words: {}", stats.word_count)?;
    writeln!(out, "Approximate sentence count: {}", stats.sentence_count)?;
    if let Some(avg) = stats.avg_word_length {
        writeln!(out, "Average word length: {avg:.2} characters")?;
    }
    if let Some(avg) = stats.avg_sentence_length {
        writeln!(out, "Average sentence length: {avg:.2} words")?;
    }
    Ok(())
}

/// Write a ranked word list, or a notice when it is empty.
pub fn write_top<W: Write>(out: &mut W, entries: &[FrequencyEntry]) -> io::Result<()> {
    heading(out, "Most Common Words")?;
    if entries.is_empty() {
        return writeln!(out, "No words found in the text.");
    }
    for (i, entry) in entries.iter().enumerate() {
        writeln!(out, "{}. '{}' appears {} times", i + 1, entry.word, entry.count)?;
    }
    Ok(())
}

/// Write search matches with the matched span marked as `*term*`.
pub fn write_search<W: Write>(out: &mut W, result: &SearchResult) -> io::Result<()> {
    heading(out, &format!("Search Results for '{}'", result.term))?;
    writeln!(out, "Found {} occurrence(s)", result.total_count)?;
    for (i, occ) in result.occurrences.iter().enumerate() {
        let marked = format!("*{}*", occ.matched);
        writeln!(
            out,
            "\n{}. {}{}{}",
            i + 1,
            occ.context_before,
            marked.if_supports_color(Stream::Stdout, |t| t.yellow()),
            occ.context_after,
        )?;
    }
    Ok(())
}

/// Write a readability report; `None` means the text was too short.
pub fn write_readability<W: Write>(
    out: &mut W,
    report: Option<&ReadabilityReport>,
) -> io::Result<()> {
    heading(out, "Readability Statistics")?;
    let Some(report) = report else {
        return writeln!(out, "Not enough text to calculate readability.");
    };
    writeln!(
        out,
        "Average words per sentence: {:.2}",
        report.avg_words_per_sentence
    )?;
    writeln!(
        out,
        "Average syllables per word: {:.2}",
        report.avg_syllables_per_word
    )?;
    writeln!(out, "Flesch Reading Ease: {:.2}", report.flesch_score)?;
    writeln!(out, "Approximate reading level: {}", report.level)
}
