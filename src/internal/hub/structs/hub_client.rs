use std::path::{Path, PathBuf};

use tracing::{debug, info};
use url::Url;

use crate::internal::auth::structs::bearer_auth::BearerAuth;
use crate::internal::config::structs::config_error::ConfigError;
use crate::internal::config::structs::fetch_config::FetchConfig;
use crate::internal::remote_file::downloader::structs::ConsoleProgress;
use crate::internal::remote_file::structs::remote_file::RemoteFile;

use super::hub_error::HubError;

/// 默认分支
pub const DEFAULT_REVISION: &str = "main";

/// 下载中的文件后缀，完成后才重命名为正式文件名
const INCOMPLETE_SUFFIX: &str = "incomplete";

/// Hub 客户端
///
/// - 文件地址：`{endpoint}/{repo_id}/resolve/{revision}/{path}`
/// - 本地缓存：`{cache_dir}/{owner}--{name}/{revision}/{path}`，命中缓存时不发起请求
/// - 下载先写入 `{file}.incomplete`，成功后重命名，中断的下载不会被当作缓存
#[derive(Debug, Clone)]
pub struct HubClient {
    auth: BearerAuth,
    endpoint: Url,
    cache_dir: PathBuf,
    show_progress: bool,
}

impl HubClient {
    pub fn new(auth: BearerAuth, endpoint: Url, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            auth,
            endpoint,
            cache_dir: cache_dir.into(),
            show_progress: true,
        }
    }

    /// 按配置创建：`HF_TOKEN` 认证、`HF_ENDPOINT` 地址、`MODEL_FETCH_CACHE` 缓存目录
    pub fn from_config(config: &FetchConfig) -> Result<Self, HubError> {
        Ok(Self::new(
            config.hub_auth()?,
            config.hub_endpoint.clone(),
            config.cache_dir.clone(),
        ))
    }

    /// 是否在控制台打印下载百分比，默认开启
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 仓库某个版本在缓存中的根目录
    pub fn repo_root(&self, repo_id: &str, revision: &str) -> Result<PathBuf, HubError> {
        let (owner, name) = split_repo_id(repo_id)?;
        let mut root = self.cache_dir.join(format!("{owner}--{name}"));
        for segment in path_segments(revision)? {
            root.push(segment);
        }
        Ok(root)
    }

    /// 文件在缓存中的路径
    pub fn cached_path(
        &self,
        repo_id: &str,
        revision: &str,
        path: &str,
    ) -> Result<PathBuf, HubError> {
        let mut target = self.repo_root(repo_id, revision)?;
        for segment in path_segments(path)? {
            target.push(segment);
        }
        Ok(target)
    }

    /// 文件的下载地址
    pub fn file_url(
        &self,
        repo_id: &str,
        revision: &str,
        path: &str,
    ) -> Result<Url, HubError> {
        let (owner, name) = split_repo_id(repo_id)?;
        let segments = path_segments(path)?;

        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ConfigError::UnsupportedScheme(self.endpoint.to_string()))?
            .pop_if_empty()
            .extend([owner, name, "resolve", revision])
            .extend(segments);
        Ok(url)
    }

    /// 获取仓库中的文件：命中缓存直接返回本地路径，否则下载后返回。
    pub async fn fetch_file(
        &self,
        repo_id: &str,
        revision: &str,
        path: &str,
    ) -> Result<PathBuf, HubError> {
        let target = self.cached_path(repo_id, revision, path)?;
        if tokio::fs::try_exists(&target).await? {
            debug!(file = %target.display(), "命中缓存");
            return Ok(target);
        }

        let url = self.file_url(repo_id, revision, path)?;
        info!("正在从 {repo_id} 拉取 {path}");

        let partial = incomplete_path(&target);
        let mut downloader = RemoteFile::new(url)
            .build_downloader(&self.auth)
            .save_to(&partial);
        if self.show_progress {
            downloader = downloader.with_hook(ConsoleProgress::new());
        }
        downloader.send().await?;

        tokio::fs::rename(&partial, &target).await?;
        Ok(target)
    }

    /// 同 [`fetch_file`](Self::fetch_file)，但文件不存在（404）时返回 `None`
    pub async fn fetch_optional_file(
        &self,
        repo_id: &str,
        revision: &str,
        path: &str,
    ) -> Result<Option<PathBuf>, HubError> {
        match self.fetch_file(repo_id, revision, path).await {
            Ok(target) => Ok(Some(target)),
            Err(err) if err.is_not_found() => {
                debug!("{repo_id} 中没有 {path}，跳过");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

fn split_repo_id(repo_id: &str) -> Result<(&str, &str), HubError> {
    let invalid = || HubError::InvalidModelId(repo_id.to_string());
    let (owner, name) = repo_id.split_once('/').ok_or_else(invalid)?;

    let valid = |s: &str| !s.is_empty() && s != "." && s != ".." && !s.contains('/');
    if valid(owner) && valid(name) {
        Ok((owner, name))
    } else {
        Err(invalid())
    }
}

/// 仓库内相对路径按 `/` 拆分；拒绝空段与 `.`、`..`，防止逃出缓存目录
fn path_segments(path: &str) -> Result<Vec<&str>, HubError> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments
        .iter()
        .any(|s| s.is_empty() || *s == "." || *s == "..")
    {
        return Err(HubError::InvalidFilePath(path.to_string()));
    }
    Ok(segments)
}

fn incomplete_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_owned();
    name.push(".");
    name.push(INCOMPLETE_SUFFIX);
    PathBuf::from(name)
}
