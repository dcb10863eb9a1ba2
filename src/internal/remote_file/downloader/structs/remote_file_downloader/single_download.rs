//! 单线程整文件下载。

use futures_util::StreamExt;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::internal::remote_file::downloader::structs::{
    DownloadConfig, DownloadError, DownloadHooksContainer, DownloadProgress,
    DownloadResult,
};
use crate::internal::remote_file::structs::remote_file::RemoteFile;
use crate::internal::states::reactive_property::ReactiveProperty;

/// 单线程下载：整文件 GET，按固定大小的块写盘并更新进度。
pub(super) async fn run_single_thread_download(
    client: &reqwest::Client,
    file: RemoteFile,
    config: DownloadConfig,
    mut hooks: DownloadHooksContainer,
    progress: ReactiveProperty<DownloadProgress>,
) -> Result<DownloadResult, DownloadError> {
    let save_path = config.save_path.ok_or(DownloadError::NoDestination)?;

    hooks.run_before_start().await?;

    if let Some(parent) =
        save_path.parent().filter(|p| !p.as_os_str().is_empty())
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(DownloadError::CreateDir)?;
    }

    debug!(url = %file.url, path = %save_path.display(), "开始下载");

    let resp = client.get(file.url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(DownloadError::Status {
            status,
            url: file.url.to_string(),
        });
    }

    let total = resp.content_length();
    progress.update(DownloadProgress { bytes_done: 0, total });

    let handle = File::create(&save_path)
        .await
        .map_err(DownloadError::CreateFile)?;
    let mut sink = BlockSink {
        file: handle,
        hooks,
        progress,
        block_size: config.block_size,
        pending: Vec::with_capacity(config.block_size),
        bytes_done: 0,
        total,
    };

    let mut stream = resp.bytes_stream();
    while let Some(chunk_result) = stream.next().await {
        sink.push(&chunk_result?).await?;
    }
    let (bytes_done, mut hooks) = sink.finish().await?;

    hooks.run_after_complete().await;

    debug!(bytes = bytes_done, "下载完成");

    Ok(DownloadResult::Saved {
        path: save_path,
        bytes: bytes_done,
    })
}

/// 把网络数据重新切成 `block_size` 大小的块；每块写盘一次、触发一次钩子与进度更新。
///
/// 只有最后一块可能不足 `block_size`。
struct BlockSink {
    file: File,
    hooks: DownloadHooksContainer,
    progress: ReactiveProperty<DownloadProgress>,
    block_size: usize,
    /// 尚未凑满一块的数据
    pending: Vec<u8>,
    bytes_done: u64,
    total: Option<u64>,
}

impl BlockSink {
    async fn push(&mut self, mut data: &[u8]) -> Result<(), DownloadError> {
        if !self.pending.is_empty() {
            let take = (self.block_size - self.pending.len()).min(data.len());
            self.pending.extend_from_slice(&data[..take]);
            data = &data[take..];
            if self.pending.len() < self.block_size {
                return Ok(());
            }
            let block = std::mem::take(&mut self.pending);
            self.write_block(&block).await?;
            self.pending = block;
            self.pending.clear();
        }

        let mut blocks = data.chunks_exact(self.block_size);
        for block in &mut blocks {
            self.write_block(block).await?;
        }
        self.pending.extend_from_slice(blocks.remainder());
        Ok(())
    }

    async fn write_block(&mut self, block: &[u8]) -> Result<(), DownloadError> {
        self.file
            .write_all(block)
            .await
            .map_err(DownloadError::WriteFile)?;
        self.bytes_done += block.len() as u64;

        self.hooks.run_on_chunk(block);
        self.hooks.run_on_progress(self.bytes_done, self.total);
        self.progress.update(DownloadProgress {
            bytes_done: self.bytes_done,
            total: self.total,
        });
        Ok(())
    }

    /// 写出最后不足一块的数据并刷盘，返回总字节数与钩子容器。
    async fn finish(mut self) -> Result<(u64, DownloadHooksContainer), DownloadError> {
        if !self.pending.is_empty() {
            let block = std::mem::take(&mut self.pending);
            self.write_block(&block).await?;
        }
        self.file.flush().await.map_err(DownloadError::FlushFile)?;
        Ok((self.bytes_done, self.hooks))
    }
}
