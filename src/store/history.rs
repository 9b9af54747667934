//! Append-only generation history.

use crate::Result;
use chrono::NaiveDateTime;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

const TEXT_PREVIEW_CHARS: usize = 100;

/// One finished generation.
#[derive(Debug, Clone)]
pub struct HistoryEntry<'a> {
    pub timestamp: NaiveDateTime,
    pub voice: &'a str,
    pub output_path: &'a Path,
    pub text: &'a str,
}

impl HistoryEntry<'_> {
    fn render(&self) -> String {
        let preview: String = self.text.chars().take(TEXT_PREVIEW_CHARS).collect();
        let ellipsis = if self.text.chars().count() > TEXT_PREVIEW_CHARS {
            "..."
        } else {
            ""
        };
        format!(
            "\n{}\nTimestamp: {}\nVoice: {}\nOutput: {}\nText: {}{}\n",
            "=".repeat(60),
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.voice,
            self.output_path.display(),
            preview,
            ellipsis
        )
    }
}

/// Plain-text history file.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &HistoryEntry<'_>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(entry.render().as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 19)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test]
    fn entries_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let log = HistoryLog::new(dir.path().join("generation_history.txt"));
        let out = Path::new("/tmp/hello.wav");

        log.append(&HistoryEntry {
            timestamp: ts(),
            voice: "Kore",
            output_path: out,
            text: "Hello",
        })
        .unwrap();
        log.append(&HistoryEntry {
            timestamp: ts(),
            voice: "Alice=Kore, Bob=Puck",
            output_path: out,
            text: "Alice: Hi",
        })
        .unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(content.matches(&"=".repeat(60)).count(), 2);
        assert!(content.contains("Timestamp: 2025-10-19 09:05:00\nVoice: Kore\n"));
        assert!(content.contains("Output: /tmp/hello.wav\nText: Hello\n"));
        assert!(content.contains("Voice: Alice=Kore, Bob=Puck\n"));
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let text = "x".repeat(150);
        let rendered = HistoryEntry {
            timestamp: ts(),
            voice: "Puck",
            output_path: Path::new("a.wav"),
            text: &text,
        }
        .render();
        assert!(rendered.ends_with(&format!("Text: {}...\n", "x".repeat(100))));
    }
}
