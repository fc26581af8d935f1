//! The interactive menu loop.
//!
//! A [`Session`] owns the current text and reads menu choices line by line.
//! It is generic over its reader and writer so tests can drive it with
//! in-memory buffers. Analysis errors are printed and the menu is shown
//! again; only choice 6 or end of input ends the session.

use std::io::{self, BufRead, Write};

use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use text_analyzer_core::{
    AnalysisError, count_elements, estimate_readability, parse_top_n, rank_frequency,
    search_with_context,
};

use crate::render;

const MENU: &str = "\
What would you like to do with this text?
1. Count words, characters, and sentences
2. Find most common words
3. Search for a word or phrase
4. Calculate readability statistics
5. Enter new text
6. Exit";

/// An interactive session over one text buffer.
pub struct Session<R, W> {
    input: R,
    output: W,
    text: String,
    context_chars: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty text buffer.
    pub const fn new(input: R, output: W, context_chars: usize) -> Self {
        Self {
            input,
            output,
            text: String::new(),
            context_chars,
        }
    }

    /// Start with `text` already loaded instead of prompting for it.
    #[must_use]
    pub fn with_text(mut self, text: String) -> Self {
        self.text = text;
        self
    }

    /// Run until the user exits or input ends.
    #[instrument(name = "shell", skip_all)]
    pub fn run(&mut self) -> io::Result<()> {
        let banner = "===== WELCOME TO THE TEXT ANALYZER =====";
        writeln!(
            self.output,
            "\n{}",
            banner.if_supports_color(Stream::Stdout, |t| t.bold())
        )?;
        writeln!(self.output, "This tool helps you analyze any text you provide.")?;

        if self.text.is_empty() {
            match self.prompt("\nEnter or paste the text you want to analyze:\n> ")? {
                Some(text) => self.text = text,
                None => return self.goodbye(),
            }
        }

        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("\nEnter your choice (1-6): ")? else {
                return self.goodbye();
            };
            debug!(choice = %choice.trim(), "menu choice");

            match choice.trim() {
                "1" => render::write_stats(&mut self.output, &count_elements(&self.text))?,
                "2" => self.top_words()?,
                "3" => self.search()?,
                "4" => self.readability()?,
                "5" => {
                    let Some(text) = self.prompt("\nEnter or paste the new text:\n> ")? else {
                        return self.goodbye();
                    };
                    self.text = text;
                    writeln!(self.output, "New text has been set!")?;
                }
                "6" => return self.goodbye(),
                _ => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number from 1 to 6."
                )?,
            }
        }
    }

    /// The text currently being analyzed.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn top_words(&mut self) -> io::Result<()> {
        let Some(answer) = self.prompt("How many top words would you like to see? ")? else {
            return Ok(());
        };
        match parse_top_n(&answer) {
            Ok(n) => render::write_top(&mut self.output, &rank_frequency(&self.text, n)),
            Err(e) => self.report(&e),
        }
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(term) = self.prompt("Enter the word or phrase to search for: ")? else {
            return Ok(());
        };
        match search_with_context(&self.text, &term, self.context_chars) {
            Ok(result) => render::write_search(&mut self.output, &result),
            Err(e) => self.report(&e),
        }
    }

    fn readability(&mut self) -> io::Result<()> {
        match estimate_readability(&self.text) {
            Ok(report) => render::write_readability(&mut self.output, Some(&report)),
            Err(AnalysisError::InsufficientText) => {
                render::write_readability(&mut self.output, None)
            }
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, err: &AnalysisError) -> io::Result<()> {
        debug!(error = %err, "analysis error in shell");
        let msg = format!("Error: {err}");
        writeln!(
            self.output,
            "{}",
            msg.if_supports_color(Stream::Stdout, |t| t.red())
        )
    }

    fn goodbye(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\nThank you for using the Text Analyzer. Goodbye!"
        )?;
        self.output.flush()
    }

    /// Print `message` and read one line, without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        let mut out = Vec::new();
        Session::new(Cursor::new(script.as_bytes()), &mut out, 20)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn counts_then_exits() {
        let out = run_session("Hello world. How are you?\n1\n6\n");
        assert!(out.contains("WELCOME TO THE TEXT ANALYZER"));
        assert!(out.contains("Total words: 5"));
        assert!(out.contains("Approximate sentence count: 2"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn invalid_choice_redisplays_menu() {
        let out = run_session("some text\n9\n6\n");
        assert!(out.contains("Invalid choice. Please enter a number from 1 to 6."));
        assert_eq!(out.matches("1. Count words").count(), 2);
    }

    #[test]
    fn bad_top_count_is_reported_and_loop_continues() {
        let out = run_session("the cat the dog\n2\nabc\n2\n1\n6\n");
        assert!(out.contains("Error: invalid argument"));
        assert!(out.contains("1. 'the' appears 2 times"));
    }

    #[test]
    fn negative_top_count_is_rejected() {
        let out = run_session("the cat\n2\n-3\n6\n");
        assert!(out.contains("non-negative"));
        assert!(!out.contains("Most Common Words"));
    }

    #[test]
    fn search_marks_matches() {
        let out = run_session("The cat sat on the mat.\n3\ncat\n6\n");
        assert!(out.contains("Search Results for 'cat'"));
        assert!(out.contains("Found 1 occurrence(s)"));
        assert!(out.contains("*cat*"));
    }

    #[test]
    fn empty_search_term_is_reported() {
        let out = run_session("The cat sat.\n3\n\n6\n");
        assert!(out.contains("Error: invalid argument"));
    }

    #[test]
    fn readability_of_short_text() {
        let out = run_session("The cat sat. The dog ran.\n4\n6\n");
        assert!(out.contains("Flesch Reading Ease: 119.19"));
        assert!(out.contains("Approximate reading level: Very Easy"));
    }

    #[test]
    fn blank_text_cannot_be_scored() {
        let out = run_session("\n4\n6\n");
        assert!(out.contains("Not enough text to calculate readability."));
    }

    #[test]
    fn new_text_replaces_buffer() {
        let mut out = Vec::new();
        let mut session = Session::new(Cursor::new(&b"first\n5\nsecond text\n6\n"[..]), &mut out, 20);
        session.run().unwrap();
        assert_eq!(session.text(), "second text");
        drop(session);
        assert!(String::from_utf8(out).unwrap().contains("New text has been set!"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let out = run_session("some text\n");
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn preloaded_text_skips_prompt() {
        let mut out = Vec::new();
        Session::new(Cursor::new(&b"1\n6\n"[..]), &mut out, 20)
            .with_text("one two three".to_string())
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("Enter or paste"));
        assert!(out.contains("Total words: 3"));
    }
}
