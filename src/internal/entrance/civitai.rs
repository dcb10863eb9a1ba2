use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::internal::config::structs::fetch_config::{FetchConfig, env_var_names};
use crate::internal::remote_file::downloader::structs::{
    ConsoleProgress, DownloadError, DownloadResult,
};
use crate::internal::remote_file::structs::remote_file::RemoteFile;

/// Pony Realism 模型在 CivitAI 上的下载地址
pub const CIVITAI_MODEL_URL: &str =
    "https://civitai.com/api/download/models/1920896";

/// Pony Realism 模型在本地模型目录中的文件名
pub const PONY_MODEL_FILE: &str = "pony_realism.safetensors";

/// [`ensure_model_file`] 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// 文件已存在，未发起任何请求
    AlreadyPresent,
    /// 本次下载成功
    Downloaded,
    /// 本次下载失败（错误已记录日志）
    Failed,
}

/// 从 CivitAI 下载模型到指定路径。
///
/// - 自动创建父目录
/// - 配置了 `CIVITAI_API_KEY` 时附带 `Authorization: Bearer <key>`，否则匿名请求
/// - 服务器提供 `Content-Length` 时在控制台打印下载百分比
///
/// 任何错误都只记录日志并返回 `false`，不会向外传播；已写入的部分文件不会被清理。
pub async fn download_civitai_model(
    config: &FetchConfig,
    url: &str,
    destination: impl AsRef<Path>,
) -> bool {
    let destination = destination.as_ref();
    info!("正在从 {url} 下载模型到 {}", destination.display());

    match try_download(config, url, destination).await {
        Ok(result) => {
            info!(
                bytes = result.bytes(),
                "模型已成功下载到 {}",
                destination.display()
            );
            true
        }
        Err(err) => {
            error!("下载模型失败: {err}");
            false
        }
    }
}

async fn try_download(
    config: &FetchConfig,
    url: &str,
    destination: &Path,
) -> Result<DownloadResult, DownloadError> {
    let remote_file = RemoteFile::parse(url)?;
    let auth = config.civitai_auth()?;

    if auth.is_authenticated() {
        info!("使用 CivitAI API key 进行认证");
    } else {
        warn!(
            "环境中未找到 {}，若模型需要认证，下载可能失败",
            env_var_names::CIVITAI_API_KEY
        );
    }

    remote_file
        .build_downloader(&auth)
        .save_to(destination)
        .with_hook(ConsoleProgress::new())
        .send()
        .await
}

/// 确保模型文件存在：已存在时直接返回，不发起任何网络请求；否则调用 [`download_civitai_model`]。
pub async fn ensure_model_file(
    config: &FetchConfig,
    path: impl AsRef<Path>,
    url: &str,
) -> EnsureOutcome {
    let path = path.as_ref();

    // try_exists 出错（如无权限）时按不存在处理，交给下载流程报错
    match tokio::fs::try_exists(path).await {
        Ok(true) => {
            info!("模型已存在于 {}", path.display());
            return EnsureOutcome::AlreadyPresent;
        }
        Ok(false) => {}
        Err(err) => {
            debug!("无法检查 {} 是否存在: {err}，继续下载", path.display());
        }
    }

    if download_civitai_model(config, url, path).await {
        EnsureOutcome::Downloaded
    } else {
        EnsureOutcome::Failed
    }
}
