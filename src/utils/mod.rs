//! 工具函数：输出文件名生成、文件大小格式化、时长估算。

mod filename;
mod format;

pub use filename::{output_file_name, sanitize_filename, FILENAME_SOURCE_CHARS, MAX_STEM_LEN};
pub use format::{estimate_audio_duration, format_duration, format_file_size};
