use std::path::PathBuf;

/// 默认写盘块大小：8KB
pub const DEFAULT_BLOCK_SIZE: usize = 8192;

/// 本次下载的配置。
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    pub save_path: Option<PathBuf>,
    /// 写盘块大小（字节）；响应数据攒满一块才落盘并通知钩子，最后一块可能不足。
    pub block_size: usize,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            save_path: None,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}
