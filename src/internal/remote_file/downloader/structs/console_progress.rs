use std::io::Write;

use async_trait::async_trait;

use crate::internal::remote_file::downloader::traits::download::DownloadHook;

use super::download_progress::DownloadProgress;

/// 控制台进度钩子：已知总大小时，以回车覆盖的方式打印累计百分比；完成后换行。
///
/// 总大小未知时不打印任何内容。
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    printed: bool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成进度文本；总大小未知或为 0 时返回 `None`。
    pub fn render(bytes_done: u64, total: Option<u64>) -> Option<String> {
        DownloadProgress { bytes_done, total }
            .pct()
            .map(|pct| format!("下载进度: {pct:.1}%"))
    }
}

#[async_trait]
impl DownloadHook for ConsoleProgress {
    fn on_progress(&mut self, bytes_done: u64, total: Option<u64>) {
        if let Some(line) = Self::render(bytes_done, total) {
            let mut stdout = std::io::stdout().lock();
            let _ = write!(stdout, "\r{line}");
            let _ = stdout.flush();
            self.printed = true;
        }
    }

    async fn after_complete(&mut self) {
        if self.printed {
            println!();
        }
    }
}
