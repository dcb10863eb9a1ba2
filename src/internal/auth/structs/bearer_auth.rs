use core::fmt;
use std::sync::Arc;

use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use sha2::{Digest, Sha256};

use super::auth_error::AuthError;

/// 发起请求时附带的 User-Agent
const USER_AGENT: &str = concat!("model_fetch/", env!("CARGO_PKG_VERSION"));

/// 认证结构体
///
/// 该结构体定位
/// - 持有已配置好 `Authorization: Bearer <token>` 默认请求头的 http 客户端
/// - 未提供令牌时为匿名客户端，请求不带任何认证头
/// - 用于 RemoteFile 下载器与 HubClient 的网络访问
///
/// 默认Eq只比较令牌摘要，原始令牌不会被保存
#[derive(Clone)]
pub struct BearerAuth {
    pub client: Client, // 内部是Arc，不需要特殊处理
    pub(crate) token_digest: Option<Arc<String>>, // 对外导出时，不允许直接访问，哪怕它是摘要
}

impl BearerAuth {
    /// 创建认证结构体；`token` 为 `None` 或空字符串时创建匿名客户端。
    pub fn new(token: Option<&str>) -> Result<Self, AuthError> {
        let token = token.map(str::trim).filter(|t| !t.is_empty());

        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut auth_value =
                HeaderValue::from_str(&format!("Bearer {token}"))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            token_digest: token.map(|t| Arc::new(digest_str(t))),
        })
    }

    /// 匿名客户端，不附带认证头
    pub fn anonymous() -> Result<Self, AuthError> {
        Self::new(None)
    }

    /// 是否会在请求中附带 Bearer 令牌
    pub fn is_authenticated(&self) -> bool {
        self.token_digest.is_some()
    }
}

fn digest_str(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// 用于比较认证结构体是否相等
impl PartialEq for BearerAuth {
    fn eq(&self, other: &Self) -> bool {
        self.token_digest == other.token_digest
    }
}

/// 防止debug泄漏令牌
impl fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuth")
            .field("client", &"<Client with hidden authorization>")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
