//! 单阶段钩子：将闭包包装成 [`DownloadHook`]，供 `with_xx_hook` 使用。

use std::future::Future;

use async_trait::async_trait;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::internal::remote_file::downloader::traits::download::{DownloadHook, HookAbort};

type BeforeStartFn = dyn FnMut() -> BoxFuture<'static, Result<(), HookAbort>> + Send + Sync;
type OnChunkFn = dyn FnMut(&[u8]) + Send + Sync;
type OnProgressFn = dyn FnMut(u64, Option<u64>) + Send + Sync;
type AfterCompleteFn = dyn FnMut() -> BoxFuture<'static, ()> + Send + Sync;

/// 只响应单个阶段的闭包钩子，其余阶段保持默认空实现。
pub(crate) enum ClosureHook {
    BeforeStart(Box<BeforeStartFn>),
    OnChunk(Box<OnChunkFn>),
    OnProgress(Box<OnProgressFn>),
    AfterComplete(Box<AfterCompleteFn>),
}

impl ClosureHook {
    pub(crate) fn before_start<F, Fut>(mut f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), HookAbort>> + Send + 'static,
    {
        Self::BeforeStart(Box::new(move || f().boxed()))
    }

    pub(crate) fn on_chunk<F>(f: F) -> Self
    where
        F: FnMut(&[u8]) + Send + Sync + 'static,
    {
        Self::OnChunk(Box::new(f))
    }

    pub(crate) fn on_progress<F>(f: F) -> Self
    where
        F: FnMut(u64, Option<u64>) + Send + Sync + 'static,
    {
        Self::OnProgress(Box::new(f))
    }

    pub(crate) fn after_complete<F, Fut>(mut f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::AfterComplete(Box::new(move || f().boxed()))
    }
}

#[async_trait]
impl DownloadHook for ClosureHook {
    async fn before_start(&mut self) -> Result<(), HookAbort> {
        match self {
            Self::BeforeStart(f) => f().await,
            _ => Ok(()),
        }
    }

    fn on_chunk(&mut self, chunk: &[u8]) {
        if let Self::OnChunk(f) = self {
            f(chunk);
        }
    }

    fn on_progress(&mut self, bytes_done: u64, total: Option<u64>) {
        if let Self::OnProgress(f) = self {
            f(bytes_done, total);
        }
    }

    async fn after_complete(&mut self) {
        if let Self::AfterComplete(f) = self {
            f().await;
        }
    }
}
