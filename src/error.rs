//! 错误类型
//!
//! 表格加载阶段的错误；排序本身永不失败

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("无法读取 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("TOML 解析失败 ({path}): {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON 解析失败 ({path}): {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("接口返回非成功状态: {0}")]
    ApiStatus(String),

    #[error("表格没有任何列")]
    NoColumns,

    #[error("第 {row} 行有 {found} 个单元格，表头有 {expected} 列")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("不支持的文件类型: {0}")]
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
