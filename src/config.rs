//! 运行配置：从环境变量解析应用目录、服务地址、超时与代理。
//!
//! Runtime configuration.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `VOICEGEN_HOME` | `<config dir>/voicegen` |
//! | `VOICEGEN_OUTPUT_DIR` | `$VOICEGEN_HOME/outputs` |
//! | `VOICEGEN_BASE_URL` | `https://generativelanguage.googleapis.com` |
//! | `VOICEGEN_HTTP_TIMEOUT_SECS` | `120` |
//! | `VOICEGEN_PROXY_URL` | unset |

use crate::client::TtsClientBuilder;
use crate::store::{CredentialStore, HistoryLog};
use crate::transport::DEFAULT_BASE_URL;
use std::env;
use std::path::PathBuf;

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Paths and connection settings resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub home: PathBuf,
    pub default_output_dir: PathBuf,
    pub base_url: String,
    pub timeout_secs: u64,
    pub proxy_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let home = env::var_os("VOICEGEN_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|d| d.join("voicegen")))
            .unwrap_or_else(|| PathBuf::from(".voicegen"));
        Self::with_home(home)
    }

    /// Configuration rooted at `home`, with the remaining variables taken from
    /// the environment.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let default_output_dir = env::var_os("VOICEGEN_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join("outputs"));
        let base_url = env::var("VOICEGEN_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout_secs = env::var("VOICEGEN_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let proxy_url = env::var("VOICEGEN_PROXY_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Self {
            home,
            default_output_dir,
            base_url,
            timeout_secs,
            proxy_url,
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.home.join("settings.json")
    }

    pub fn history_log(&self) -> HistoryLog {
        HistoryLog::new(self.home.join("generation_history.txt"))
    }

    pub fn credentials(&self) -> CredentialStore {
        CredentialStore::new(self.home.join(".env"))
    }

    /// A client builder pointed at the configured service.
    pub fn client_builder(&self) -> TtsClientBuilder {
        TtsClientBuilder::new()
            .base_url(self.base_url.clone())
            .timeout_secs(self.timeout_secs)
            .proxy_url(self.proxy_url.clone())
    }
}
