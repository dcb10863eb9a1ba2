use core::fmt;
use std::path::PathBuf;

use url::Url;

use crate::internal::auth::structs::auth_error::AuthError;
use crate::internal::auth::structs::bearer_auth::BearerAuth;

use super::config_error::ConfigError;

/// 环境变量名，便于 IDE 补全与文档。
pub mod env_var_names {
    /// CivitAI 下载令牌
    pub const CIVITAI_API_KEY: &str = "CIVITAI_API_KEY";
    /// Hub 访问令牌
    pub const HF_TOKEN: &str = "HF_TOKEN";
    /// Hub 根地址
    pub const HF_ENDPOINT: &str = "HF_ENDPOINT";
    /// CivitAI 模型文件的保存目录
    pub const MODEL_DIR: &str = "MODEL_DIR";
    /// Hub 文件缓存目录
    pub const MODEL_FETCH_CACHE: &str = "MODEL_FETCH_CACHE";
}

/// 默认模型目录
pub const DEFAULT_MODEL_DIR: &str = "/models";

/// 默认 Hub 根地址
pub const DEFAULT_HUB_ENDPOINT: &str = "https://huggingface.co";

/// 运行配置：全部来自环境变量，未设置的项使用默认值。
#[derive(Clone, PartialEq)]
pub struct FetchConfig {
    pub model_dir: PathBuf,
    pub civitai_api_key: Option<String>,
    pub hf_token: Option<String>,
    pub hub_endpoint: Url,
    pub cache_dir: PathBuf,
}

impl FetchConfig {
    /// 从进程环境变量读取配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源读取配置；空字符串视为未设置。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let hub_endpoint = get(env_var_names::HF_ENDPOINT)
            .unwrap_or_else(|| DEFAULT_HUB_ENDPOINT.to_string());

        Ok(Self {
            model_dir: get(env_var_names::MODEL_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR)),
            civitai_api_key: get(env_var_names::CIVITAI_API_KEY),
            hf_token: get(env_var_names::HF_TOKEN),
            hub_endpoint: parse_endpoint(&hub_endpoint)?,
            cache_dir: get(env_var_names::MODEL_FETCH_CACHE)
                .map(PathBuf::from)
                .unwrap_or_else(Self::default_cache_dir),
        })
    }

    /// 默认缓存目录：系统缓存目录下的 `model_fetch/hub`，取不到时退回当前目录下的 `.cache`
    pub fn default_cache_dir() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("model_fetch")
            .join("hub")
    }

    /// CivitAI 下载使用的认证客户端
    pub fn civitai_auth(&self) -> Result<BearerAuth, AuthError> {
        BearerAuth::new(self.civitai_api_key.as_deref())
    }

    /// Hub 访问使用的认证客户端
    pub fn hub_auth(&self) -> Result<BearerAuth, AuthError> {
        BearerAuth::new(self.hf_token.as_deref())
    }
}

fn parse_endpoint(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidEndpoint {
        value: value.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(value.to_string())),
    }
}

/// 防止debug泄漏令牌
impl fmt::Debug for FetchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = |v: &Option<String>| v.as_ref().map(|_| "<hidden>");
        f.debug_struct("FetchConfig")
            .field("model_dir", &self.model_dir)
            .field("civitai_api_key", &mask(&self.civitai_api_key))
            .field("hf_token", &mask(&self.hf_token))
            .field("hub_endpoint", &self.hub_endpoint.as_str())
            .field("cache_dir", &self.cache_dir)
            .finish()
    }
}
