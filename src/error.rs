use thiserror::Error;

/// 库的错误类型。
///
/// 分词、索引和渲染本身不会失败，这里只覆盖调用方边界（解析时间值、语言标识）
/// 以及终端和序列化的 I/O。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid timing value: {0:?} (expected e.g. \"400ms\", \"1.5s\" or \"var(--name)\")")]
    InvalidTimingValue(String),

    #[error("Invalid locale identifier: {0:?}")]
    InvalidLocale(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
