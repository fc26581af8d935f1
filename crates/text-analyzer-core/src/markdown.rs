//! Markdown processing utilities.
//!
//! Uses pulldown-cmark for CommonMark parsing so that code, headings, and
//! front matter in `.md` inputs do not inflate word counts or skew
//! readability.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes:
/// - Code blocks (fenced and indented)
/// - Inline code
/// - HTML
/// - YAML frontmatter
/// - Headings
///
/// Preserves:
/// - Link text
/// - Blockquote and list item text
/// - Emphasis/strong text (without markers)
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. }) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_)) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }
            // Block boundaries must not glue words together.
            Event::End(TagEnd::Paragraph | TagEnd::Item | TagEnd::TableCell)
                if skip_depth == 0 =>
            {
                result.push(' ');
            }
            _ => {}
        }
    }

    result.trim_end().to_string()
}

/// Drop a leading `---` delimited YAML block, if present.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };
    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::count_elements;

    #[test]
    fn strip_removes_code_blocks() {
        let input = "Some text.\n\n```rust\nlet x = 1;\n```\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("let x"));
        assert!(result.contains("Some text."));
        assert!(result.contains("More text."));
    }

    #[test]
    fn strip_removes_frontmatter() {
        let input = "---\ntitle: Notes\n---\n\nSome text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("title"));
        assert_eq!(result, "Some text.");
    }

    #[test]
    fn unterminated_frontmatter_is_kept() {
        let result = strip_to_prose("---\nnot closed");
        assert!(result.contains("not closed"));
    }

    #[test]
    fn strip_removes_headings() {
        let input = "# Header\n\nSome text.\n\n## Subheader\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("Header"));
        assert!(result.contains("Some text."));
        assert!(result.contains("More text."));
    }

    #[test]
    fn strip_keeps_link_text_and_drops_inline_code() {
        let result = strip_to_prose("Call `run()` or see [the guide](https://example.com).");
        assert!(result.contains("the guide"));
        assert!(!result.contains("example.com"));
        assert!(!result.contains("run()"));
    }

    #[test]
    fn list_items_stay_separate_words() {
        let result = strip_to_prose("- alpha\n- beta\n");
        assert_eq!(count_elements(&result).word_count, 2);
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
    }
}
