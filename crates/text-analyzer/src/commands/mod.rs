//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

use text_analyzer_core::markdown;

pub mod analyze;
pub mod info;
pub mod interactive;
pub mod readability;
pub mod search;
pub mod stats;
pub mod top;

/// Where a command reads its text from.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// File to analyze (`-` or omitted reads standard input)
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Analyze this text instead of a file
    #[arg(long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Strip markdown before analysis (automatic for `.md` files)
    #[arg(long)]
    pub strip_markdown: bool,
}

impl InputArgs {
    /// Short description of the input for logs and messages.
    pub fn source(&self) -> &str {
        match (&self.text, &self.file) {
            (Some(_), _) => "<text>",
            (None, Some(path)) if path.as_str() != "-" => path.as_str(),
            _ => "<stdin>",
        }
    }

    /// Read the input text, enforcing the size limit and stripping markdown
    /// when requested or when the file has a `.md` extension.
    pub fn load(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        match self.load_without_stdin(max_bytes)? {
            Some(text) => Ok(text),
            None => Ok(self.prepare(read_stdin(max_bytes)?)),
        }
    }

    /// Like [`load`](Self::load), but `None` where `load` would read
    /// standard input.
    pub fn load_without_stdin(&self, max_bytes: Option<usize>) -> anyhow::Result<Option<String>> {
        let raw = match (&self.text, &self.file) {
            (Some(text), _) => {
                check_size(text.len(), max_bytes, "--text")?;
                text.clone()
            }
            (None, Some(path)) if path.as_str() != "-" => read_input_file(path, max_bytes)?,
            _ => return Ok(None),
        };
        Ok(Some(self.prepare(raw)))
    }

    fn prepare(&self, raw: String) -> String {
        let is_markdown = self
            .file
            .as_ref()
            .is_some_and(|p| p.extension() == Some("md"));

        if self.strip_markdown || is_markdown {
            markdown::strip_to_prose(&raw)
        } else {
            raw
        }
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    check_size(size, max_bytes, path.as_str())?;

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut bytes = Vec::new();
    let mut stdin = std::io::stdin().lock();
    let read = match max_bytes {
        // Read one byte past the limit so oversize input is detectable.
        Some(max) => (&mut stdin).take(max as u64 + 1).read_to_end(&mut bytes),
        None => stdin.read_to_end(&mut bytes),
    };
    read.context("failed to read standard input")?;
    check_size(bytes.len(), max_bytes, "<stdin>")?;
    String::from_utf8(bytes).context("standard input is not valid UTF-8")
}

fn check_size(size: usize, max_bytes: Option<usize>, label: &str) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max
    {
        anyhow::bail!("input too large: {label} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_flag_wins() {
        let args = InputArgs {
            text: Some("hello".to_string()),
            ..InputArgs::default()
        };
        assert_eq!(args.source(), "<text>");
        assert_eq!(args.load(None).unwrap(), "hello");
    }

    #[test]
    fn text_flag_respects_limit() {
        let args = InputArgs {
            text: Some("too long".to_string()),
            ..InputArgs::default()
        };
        let err = args.load(Some(3)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn reads_files_and_strips_markdown() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("notes.md")).unwrap();
        std::fs::write(&path, "# Title\n\nPlain words here.\n").unwrap();

        let args = InputArgs {
            file: Some(path.clone()),
            ..InputArgs::default()
        };
        assert_eq!(args.source(), path.as_str());
        let text = args.load(None).unwrap();
        assert!(!text.contains("Title"));
        assert!(text.contains("Plain words here."));
    }

    #[test]
    fn load_without_stdin_applies_limit_and_markdown() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("notes.md")).unwrap();
        std::fs::write(&path, "# Heading\n\nPlain `code` words.\n").unwrap();

        let args = InputArgs {
            file: Some(path),
            ..InputArgs::default()
        };
        let text = args.load_without_stdin(None).unwrap().unwrap();
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), ["Plain", "words."]);

        let text = InputArgs {
            text: Some("too long".to_string()),
            ..InputArgs::default()
        };
        assert!(text.load_without_stdin(Some(3)).is_err());
    }

    #[test]
    fn load_without_stdin_skips_stdin_sources() {
        assert!(InputArgs::default().load_without_stdin(None).unwrap().is_none());
        let dash = InputArgs {
            file: Some(Utf8PathBuf::from("-")),
            ..InputArgs::default()
        };
        assert!(dash.load_without_stdin(None).unwrap().is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_input_file(Utf8Path::new("/definitely/not/here.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn saturated_size_is_over_any_limit() {
        assert!(check_size(usize::MAX, Some(usize::MAX - 1), "huge").is_err());
        assert!(check_size(usize::MAX, None, "huge").is_ok());
    }

    #[test]
    fn file_over_limit_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("big.txt")).unwrap();
        std::fs::write(&path, "x".repeat(64)).unwrap();
        assert!(read_input_file(&path, Some(10)).is_err());
        assert!(read_input_file(&path, Some(64)).is_ok());
    }
}
