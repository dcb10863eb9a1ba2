//! 下载相关错误类型。

use reqwest::StatusCode;
use thiserror::Error;

use crate::internal::auth::structs::auth_error::AuthError;
use crate::internal::remote_file::downloader::traits::download::HookAbort;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("HTTP 请求失败: {0}")]
    Request(#[from] reqwest::Error),

    #[error("服务器返回错误状态 {status}: {url}")]
    Status { status: StatusCode, url: String },

    #[error("下载地址格式错误: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("创建目录失败: {0}")]
    CreateDir(std::io::Error),

    #[error("创建文件失败: {0}")]
    CreateFile(std::io::Error),

    #[error("写入文件失败: {0}")]
    WriteFile(std::io::Error),

    #[error("刷新文件失败: {0}")]
    FlushFile(std::io::Error),

    #[error("未设置保存路径")]
    NoDestination,

    /// 钩子在 before_start 中返回错误，中止下载。
    #[error("{0}")]
    HookAbort(#[from] HookAbort),
}

impl DownloadError {
    /// 是否属于网络或文件读写类错误（可重试的一类）。
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            Self::Request(_)
                | Self::Status { .. }
                | Self::CreateDir(_)
                | Self::CreateFile(_)
                | Self::WriteFile(_)
                | Self::FlushFile(_)
        )
    }

    /// 服务器返回 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
