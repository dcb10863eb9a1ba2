//! Hub 相关错误类型。

use thiserror::Error;

use crate::internal::auth::structs::auth_error::AuthError;
use crate::internal::config::structs::config_error::ConfigError;
use crate::internal::hub::traits::retry_class::RetryClass;
use crate::internal::remote_file::downloader::structs::DownloadError;

#[derive(Debug, Error)]
pub enum HubError {
    #[error("下载失败: {0}")]
    Download(#[from] DownloadError),

    #[error("文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("配置无效: {0}")]
    Config(#[from] ConfigError),

    #[error("模型标识无效: `{0}`（应为 owner/name）")]
    InvalidModelId(String),

    #[error("仓库内文件路径无效: `{0}`")]
    InvalidFilePath(String),

    #[error("model_index.json 解析失败: {0}")]
    InvalidModelIndex(#[from] serde_json::Error),

    #[error("管线类型不匹配: 期望 {expected}，实际 {actual}")]
    UnexpectedPipeline { expected: String, actual: String },

    #[error("组件 {name} 来自不支持的库 {library}")]
    UnsupportedComponent { name: String, library: String },
}

impl HubError {
    /// 是否属于 I/O 类错误：文件读写、网络传输、HTTP 错误状态（含仓库或文件不存在）。
    pub fn is_io(&self) -> bool {
        match self {
            Self::Download(e) => e.is_io(),
            Self::Io(_) => true,
            _ => false,
        }
    }

    /// 服务器返回 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Download(e) if e.is_not_found())
    }
}

impl RetryClass for HubError {
    fn is_retryable(&self) -> bool {
        self.is_io()
    }
}
