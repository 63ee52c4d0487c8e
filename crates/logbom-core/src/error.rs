//! 错误类型
use std::path::PathBuf;
use thiserror::Error;

/// 核心库的错误类型
#[derive(Error, Debug)]
pub enum Error {
    /// 打开或读取某个输入文件失败
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 扫描根路径不存在
    #[error("path not found: {0}")]
    MissingRoot(PathBuf),

    /// 没有任何待处理的输入文件
    #[error("No files given.")]
    NoInputFiles,

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("invalid glob: {0}")]
    Glob(#[from] glob::PatternError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 写标准输出（或调用方提供的 writer）失败
    #[error("write failed: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
