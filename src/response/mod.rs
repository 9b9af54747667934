//! 响应解码模块：从 Gemini 响应信封中取出内联 PCM 音频。

mod decode;

pub use decode::ResponseDecoder;
