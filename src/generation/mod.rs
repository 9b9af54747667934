//! 生成编排模块：构建请求 → 调用外部 TTS → 解码响应 → 写出 WAV，并汇报每个阶段的进度。
//!
//! # Generation Module
//!
//! | Item | Description |
//! |------|-------------|
//! | [`Orchestrator`] | Runs one generation end to end; the only caller of the speech service |
//! | [`GenerationOutcome`] | `Success { output_path }` or `Failure { kind, message }` |
//! | [`ProgressReporter`] | Sink for human-readable stage messages |
//! | [`GenerationWorker`] | Runs the orchestrator off the interactive thread, one at a time |

mod orchestrator;
mod outcome;
mod progress;
mod worker;

pub use orchestrator::Orchestrator;
pub use outcome::GenerationOutcome;
pub use progress::{ChannelReporter, NoopReporter, ProgressReporter};
pub use worker::{GenerationHandle, GenerationWorker};
