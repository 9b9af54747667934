//! Persisted user settings.

use crate::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Free-tier requests per minute (displayed, not enforced).
pub const FREE_TIER_RPM: u32 = 15;
/// Free-tier requests per day (displayed, not enforced).
pub const FREE_TIER_DAILY_ESTIMATE: u32 = 1500;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Loaded once at startup, passed to whoever needs it, saved after each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub generation_count: u32,
    #[serde(default)]
    pub last_date: String,
    pub output_dir: PathBuf,
}

impl Settings {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            generation_count: 0,
            last_date: String::new(),
            output_dir: output_dir.into(),
        }
    }

    /// Reads `path`; a missing file or missing keys yield defaults. The daily counter is
    /// reset when `last_date` is not `today`.
    pub fn load(path: &Path, today: NaiveDate, default_output_dir: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new(default_output_dir));
        }
        let raw = fs::read_to_string(path)?;
        let stored: StoredSettings = serde_json::from_str(&raw)?;
        let mut settings = Settings {
            generation_count: stored.generation_count.unwrap_or(0),
            last_date: stored.last_date.unwrap_or_default(),
            output_dir: stored
                .output_dir
                .filter(|d| !d.as_os_str().is_empty())
                .unwrap_or_else(|| default_output_dir.to_path_buf()),
        };
        settings.roll_over(today);
        Ok(settings)
    }

    /// Like [`Settings::load`], but falls back to defaults on a corrupt file.
    pub fn load_or_default(path: &Path, today: NaiveDate, default_output_dir: &Path) -> Self {
        Self::load(path, today, default_output_dir).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "error loading settings, using defaults");
            Self::new(default_output_dir)
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Counts one successful generation on `today`.
    pub fn record_generation(&mut self, today: NaiveDate) {
        self.roll_over(today);
        self.generation_count += 1;
        self.last_date = today.format(DATE_FORMAT).to_string();
    }

    pub fn usage(&self) -> UsageEstimate {
        UsageEstimate {
            used_today: self.generation_count,
            daily_estimate: FREE_TIER_DAILY_ESTIMATE,
            requests_per_minute: FREE_TIER_RPM,
        }
    }

    fn roll_over(&mut self, today: NaiveDate) {
        let same_day = NaiveDate::parse_from_str(&self.last_date, DATE_FORMAT)
            .map(|d| d == today)
            .unwrap_or(false);
        if !same_day {
            self.generation_count = 0;
        }
    }
}

/// On-disk shape; every key is optional so one missing or `null` field does
/// not discard the rest.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredSettings {
    generation_count: Option<u32>,
    last_date: Option<String>,
    output_dir: Option<PathBuf>,
}

/// Free-tier usage figures for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageEstimate {
    pub used_today: u32,
    pub daily_estimate: u32,
    pub requests_per_minute: u32,
}

impl UsageEstimate {
    pub fn remaining_today(&self) -> u32 {
        self.daily_estimate.saturating_sub(self.used_today)
    }
}

impl std::fmt::Display for UsageEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Calls Today: {}/~{}", self.used_today, self.daily_estimate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(&dir.path().join("none.json"), day(1), Path::new("out")).unwrap();
        assert_eq!(s, Settings::new("out"));
    }

    #[test]
    fn counter_survives_same_day_and_resets_next_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut s = Settings::new(dir.path());
        s.record_generation(day(3));
        s.record_generation(day(3));
        s.save(&path).unwrap();

        let same = Settings::load(&path, day(3), Path::new("x")).unwrap();
        assert_eq!(same.generation_count, 2);
        assert_eq!(same.last_date, "2025-10-03");
        assert_eq!(same.output_dir, dir.path());

        let next = Settings::load(&path, day(4), Path::new("x")).unwrap();
        assert_eq!(next.generation_count, 0);
    }

    #[test]
    fn file_format_matches_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut s = Settings::new("/tmp/audio");
        s.record_generation(day(9));
        s.save(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["generation_count"], 1);
        assert_eq!(json["last_date"], "2025-10-09");
        assert_eq!(json["output_dir"], "/tmp/audio");
    }

    #[test]
    fn corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load(&path, day(1), Path::new("out")).is_err());
        let s = Settings::load_or_default(&path, day(1), Path::new("out"));
        assert_eq!(s.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn missing_output_dir_keeps_counter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"generation_count": 7, "last_date": "2025-10-03"}"#).unwrap();

        let s = Settings::load_or_default(&path, day(3), Path::new("out"));
        assert_eq!(s.generation_count, 7);
        assert_eq!(s.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn null_fields_take_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"generation_count": 2, "last_date": "2025-10-05", "output_dir": null}"#,
        )
        .unwrap();

        let s = Settings::load(&path, day(5), Path::new("out")).unwrap();
        assert_eq!(s.generation_count, 2);
        assert_eq!(s.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn usage_display() {
        let mut s = Settings::new("out");
        s.record_generation(day(1));
        assert_eq!(s.usage().to_string(), "API Calls Today: 1/~1500");
        assert_eq!(s.usage().remaining_today(), 1499);
    }
}
