//! API key storage in a `KEY=value` file, with environment and keyring lookup.

use crate::client::API_KEY_ENV;
use crate::Result;
use keyring::Entry;
use std::fs;
use std::path::{Path, PathBuf};

const KEYRING_SERVICE: &str = "voicegen";
const KEYRING_USER: &str = "gemini";

/// Credentials file (`.env` style) plus fallbacks.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
    use_keyring: bool,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            use_keyring: true,
        }
    }

    /// Disable the OS keyring fallback (tests, headless machines).
    pub fn without_keyring(mut self) -> Self {
        self.use_keyring = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// First non-blank key from: environment, credentials file, OS keyring.
    pub fn resolve(&self) -> Option<String> {
        non_blank(std::env::var(API_KEY_ENV).ok())
            .or_else(|| non_blank(self.read_file_key()))
            .or_else(|| {
                if self.use_keyring {
                    non_blank(keyring_key())
                } else {
                    None
                }
            })
    }

    /// The key stored in the credentials file, if any.
    pub fn read_file_key(&self) -> Option<String> {
        let content = fs::read_to_string(&self.path).ok()?;
        content.lines().find_map(|line| parse_assignment(line, API_KEY_ENV))
    }

    /// Rewrites the key line of the credentials file, keeping other lines.
    pub fn save_key(&self, key: &str) -> Result<()> {
        let existing = fs::read_to_string(&self.path).unwrap_or_default();
        let mut lines: Vec<String> = existing
            .lines()
            .filter(|line| parse_assignment(line, API_KEY_ENV).is_none())
            .map(String::from)
            .collect();
        lines.push(format!("{}={}", API_KEY_ENV, key.trim()));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, lines.join("\n") + "\n")?;
        tracing::info!(path = %self.path.display(), "api key saved");
        Ok(())
    }
}

fn keyring_key() -> Option<String> {
    Entry::new(KEYRING_SERVICE, KEYRING_USER)
        .ok()
        .and_then(|entry| entry.get_password().ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses `KEY=value`, `export KEY=value`, with optional quotes around value.
fn parse_assignment(line: &str, key: &str) -> Option<String> {
    let line = line.trim();
    if line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (k, v) = line.split_once('=')?;
    if k.trim() != key {
        return None;
    }
    let v = v.trim();
    let v = v
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| v.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(v);
    Some(v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Runs `f` with `GEMINI_API_KEY` set to `value` (or unset), restoring it after.
    fn with_env_key<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved = std::env::var_os(API_KEY_ENV);
        match value {
            Some(v) => std::env::set_var(API_KEY_ENV, v),
            None => std::env::remove_var(API_KEY_ENV),
        }
        let out = f();
        match saved {
            Some(v) => std::env::set_var(API_KEY_ENV, v),
            None => std::env::remove_var(API_KEY_ENV),
        }
        out
    }

    fn store_with(content: &str) -> (tempfile::TempDir, CredentialStore) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, content).unwrap();
        let store = CredentialStore::new(path).without_keyring();
        (dir, store)
    }

    #[test]
    fn file_key_used_when_env_unset() {
        let (_dir, store) = store_with("GEMINI_API_KEY=from-file\n");
        let key = with_env_key(None, || store.resolve());
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn env_key_wins_over_file() {
        let (_dir, store) = store_with("GEMINI_API_KEY=from-file\n");
        let key = with_env_key(Some("from-env"), || store.resolve());
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn blank_env_falls_through_to_file() {
        let (_dir, store) = store_with("GEMINI_API_KEY=from-file\n");
        let key = with_env_key(Some("   "), || store.resolve());
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn blank_file_key_is_missing() {
        let (_dir, store) = store_with("GEMINI_API_KEY=\n");
        let key = with_env_key(None, || store.resolve());
        assert_eq!(key, None);
    }

    #[test]
    fn parses_assignments() {
        assert_eq!(
            parse_assignment("GEMINI_API_KEY=abc", API_KEY_ENV).as_deref(),
            Some("abc")
        );
        assert_eq!(
            parse_assignment("export GEMINI_API_KEY=\"abc\"", API_KEY_ENV).as_deref(),
            Some("abc")
        );
        assert_eq!(parse_assignment("# GEMINI_API_KEY=abc", API_KEY_ENV), None);
        assert_eq!(parse_assignment("OTHER=abc", API_KEY_ENV), None);
    }

    #[test]
    fn save_preserves_other_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "RUST_LOG=debug\nGEMINI_API_KEY=old\n").unwrap();

        let store = CredentialStore::new(&path).without_keyring();
        store.save_key("  new-key ").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "RUST_LOG=debug\nGEMINI_API_KEY=new-key\n");
        assert_eq!(store.read_file_key().as_deref(), Some("new-key"));
    }

    #[test]
    fn missing_file_has_no_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(dir.path().join("absent.env")).without_keyring();
        assert_eq!(store.read_file_key(), None);
    }
}
