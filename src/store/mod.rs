//! 本地持久化：设置（JSON）、生成历史（文本日志）、API 密钥（key=value 文件）。

mod credentials;
mod history;
mod settings;

pub use credentials::CredentialStore;
pub use history::{HistoryEntry, HistoryLog};
pub use settings::{Settings, UsageEstimate, FREE_TIER_DAILY_ESTIMATE, FREE_TIER_RPM};
