//! 配置相关错误类型。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Hub 地址格式错误 `{value}`: {source}")]
    InvalidEndpoint {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Hub 地址仅支持 http/https: {0}")]
    UnsupportedScheme(String),
}
