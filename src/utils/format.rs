//! Human-readable sizes and durations.

/// Average speaking rate used for duration estimates.
const WORDS_PER_MINUTE: f64 = 150.0;

/// `1536` → `"1.5 KB"`.
pub fn format_file_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{:.1} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1} TB", size)
}

/// Estimated spoken length of `text`, in seconds.
pub fn estimate_audio_duration(text: &str) -> f64 {
    let words = text.split_whitespace().count() as f64;
    words / WORDS_PER_MINUTE * 60.0
}

/// `83.4` → `"1:23"`.
pub fn format_duration(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
