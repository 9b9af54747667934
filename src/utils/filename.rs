//! Output file naming.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// How much of the source text feeds the file name.
pub const FILENAME_SOURCE_CHARS: usize = 100;
/// Longest stem kept before the timestamp suffix.
pub const MAX_STEM_LEN: usize = 50;

const FALLBACK_STEM: &str = "audio";

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").expect("valid regex"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").expect("valid regex"));

/// Lowercased, punctuation-free, underscore-separated stem with a
/// `YYYYMMDD_HHMMSS` suffix, e.g. `hello_world_123_20251019_143000`.
///
/// Stems shorter than three characters become `audio`.
pub fn sanitize_filename(text: &str, max_length: usize, now: NaiveDateTime) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let collapsed = SEPARATORS.replace_all(&stripped, "_");
    let mut stem: String = collapsed.trim_matches('_').chars().take(max_length).collect();

    if stem.chars().count() < 3 {
        stem = FALLBACK_STEM.to_string();
    }

    format!("{}_{}", stem, now.format("%Y%m%d_%H%M%S"))
}

/// `<stem>.wav` for the first [`FILENAME_SOURCE_CHARS`] characters of `text`.
pub fn output_file_name(text: &str, now: NaiveDateTime) -> String {
    let head: String = text.chars().take(FILENAME_SOURCE_CHARS).collect();
    format!("{}.wav", sanitize_filename(&head, MAX_STEM_LEN, now))
}
