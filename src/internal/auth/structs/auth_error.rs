//! 认证相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("令牌包含非法字符: {0}")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("创建 HTTP 客户端失败: {0}")]
    BuildClient(#[from] reqwest::Error),
}
