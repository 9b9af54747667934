//! 传输层：对 Gemini REST 端点的 HTTP 调用与错误分类。

mod http;

pub use http::{HttpTransport, TransportError, DEFAULT_BASE_URL};
