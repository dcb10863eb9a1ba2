//! 下载相关 trait：钩子接口，供下载器领域模块调用。
//!
//! 下载器由远程文件创建并执行下载；对外使用入口为 [`crate::remote_file`]。

use async_trait::async_trait;

/// 钩子执行时请求中止下载时使用的错误。
#[derive(Debug, Clone)]
pub struct HookAbort(pub String);

impl std::fmt::Display for HookAbort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("下载被钩子中止")
        } else {
            write!(f, "下载被钩子中止: {}", self.0)
        }
    }
}

impl std::error::Error for HookAbort {}

/// 下载流程钩子：在「开始前 / 进度 / 每块数据 / 完成后」插入自定义逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用 `with_before_start_hook` / `with_on_chunk_hook` / `with_on_progress_hook` / `with_after_complete_hook` 传入闭包；
/// - **完整钩子**：实现本 trait，通过下载器的 `with_hook` 注册。
#[async_trait]
pub trait DownloadHook: Send + Sync {
    /// 发起请求前调用。返回 `Err` 则中止本次下载，不会产生任何网络请求。
    async fn before_start(&mut self) -> Result<(), HookAbort> {
        Ok(())
    }

    /// 每收到一段数据时调用。`chunk` 为本段字节。
    fn on_chunk(&mut self, _chunk: &[u8]) {}

    /// 进度更新（累计已下载字节、总大小）。总大小来自响应的 `Content-Length`，缺失时为 `None`。
    fn on_progress(&mut self, _bytes_done: u64, _total: Option<u64>) {}

    /// 下载成功结束后调用。
    async fn after_complete(&mut self) {}
}
