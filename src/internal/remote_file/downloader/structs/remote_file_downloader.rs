//! 远程文件下载器
//!
//! 本模块实现了远程模型文件的下载功能：整文件 GET，流式写入本地文件。
//!
//! ## 功能特性
//!
//! - **认证**：请求经由 [`BearerAuth`] 的客户端发出，配置了令牌时自动附带 `Authorization: Bearer <token>`
//! - **自动建目录**：保存路径的父目录不存在时自动创建
//! - **按块写盘**：响应数据经固定大小的缓冲块写入文件（见 `DEFAULT_BLOCK_SIZE`）
//! - **响应式进度**：通过 `progress()` 获取可监听的下载进度状态
//! - **钩子机制**：支持在下载各阶段插入自定义逻辑（开始前、每块数据、进度更新、完成后）
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! # use model_fetch::remote_file::{ConsoleProgress, RemoteFile};
//! # use model_fetch::auth::BearerAuth;
//! # async fn example(auth: BearerAuth) -> Result<(), Box<dyn std::error::Error>> {
//! let remote_file = RemoteFile::parse("https://example.com/model.safetensors")?;
//! let result = remote_file
//!     .build_downloader(&auth)
//!     .save_to("/models/model.safetensors")
//!     .with_hook(ConsoleProgress::new())
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! 非 2xx 响应会返回 [`DownloadError::Status`]，此时不会创建目标文件。
//! 写入中途失败时已写入的部分不会被清理。

mod single_download;

use std::future::Future;
use std::path::Path;

use reqwest::Client;

use crate::internal::auth::structs::bearer_auth::BearerAuth;
use crate::internal::remote_file::downloader::traits::download::{DownloadHook, HookAbort};
use crate::internal::remote_file::structs::remote_file::RemoteFile;
use crate::internal::states::reactive_property::ReactiveProperty;

use super::download_config::DownloadConfig;
use super::download_error::DownloadError;
use super::download_hooks_container::DownloadHooksContainer;
use super::download_progress::DownloadProgress;
use super::download_result::DownloadResult;
use super::hook_adapters::ClosureHook;
use single_download::run_single_thread_download;

/// 远程文件下载器
///
/// 拥有响应式属性（通过 `progress()` 获取）：记录已下载大小（`bytes_done`）与总大小（`total`）。
pub struct RemoteFileDownloader {
    pub(crate) client: Client,
    pub(crate) file: RemoteFile,
    pub(crate) config: DownloadConfig,
    pub(crate) hooks: DownloadHooksContainer,
    pub(crate) progress_state: ReactiveProperty<DownloadProgress>,
}

/// 由远程文件创建其专属下载器（供 [`RemoteFile::build_downloader`] 使用）。
pub fn build_downloader(
    remote_file: &RemoteFile,
    auth: &BearerAuth,
) -> RemoteFileDownloader {
    RemoteFileDownloader {
        client: auth.client.clone(),
        file: remote_file.clone(),
        config: DownloadConfig::default(),
        hooks: Default::default(),
        progress_state: ReactiveProperty::new(DownloadProgress::default()),
    }
}

impl RemoteFile {
    /// 创建专属于本远程文件的下载器；可链式配置后调用 [`RemoteFileDownloader::send`] 执行下载。
    pub fn build_downloader(&self, auth: &BearerAuth) -> RemoteFileDownloader {
        build_downloader(self, auth)
    }
}

impl RemoteFileDownloader {
    /// 设置保存路径；传空路径等同于未设置。
    pub fn save_to(mut self, path: impl AsRef<Path>) -> Self {
        let p = path.as_ref();
        self.config.save_path = if p.as_os_str().is_empty() {
            None
        } else {
            Some(p.to_path_buf())
        };
        self
    }

    /// 设置写盘块大小（字节），0 会被当作 1。
    pub fn block_size(mut self, size: usize) -> Self {
        self.config.block_size = size.max(1);
        self
    }

    /// 注册「开始前」钩子；闭包返回 `Err(HookAbort)` 会中止本次下载。
    pub fn with_before_start_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
    {
        self.hooks.add(ClosureHook::before_start(f));
        self
    }

    /// 注册「每块数据」钩子。
    pub fn with_on_chunk_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&[u8]) + Send + Sync + 'static,
    {
        self.hooks.add(ClosureHook::on_chunk(f));
        self
    }

    /// 注册「进度」钩子；参数为已下载字节数、总大小（可能未知为 `None`）。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(u64, Option<u64>) + Send + Sync + 'static,
    {
        self.hooks.add(ClosureHook::on_progress(f));
        self
    }

    /// 注册「完成后」钩子；下载成功结束后调用。
    pub fn with_after_complete_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.hooks.add(ClosureHook::after_complete(f));
        self
    }

    /// 添加完整钩子；可链式多次调用，各钩子按注册顺序执行。
    pub fn with_hook(mut self, hook: impl DownloadHook + 'static) -> Self {
        self.hooks.add(hook);
        self
    }

    /// 内置的下载进度状态；返回可共享句柄，`.watch()` 后 `changed().await` 监听进度。
    pub fn progress(&self) -> ReactiveProperty<DownloadProgress> {
        self.progress_state.clone()
    }

    /// 执行下载。
    pub async fn send(self) -> Result<DownloadResult, DownloadError> {
        run_single_thread_download(
            &self.client,
            self.file,
            self.config,
            self.hooks,
            self.progress_state,
        )
        .await
    }
}
