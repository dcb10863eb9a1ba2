use std::path::PathBuf;

/// 单次下载的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadResult {
    /// 已保存到本地文件，`bytes` 为实际写入的字节数
    Saved { path: PathBuf, bytes: u64 },
}

impl DownloadResult {
    pub fn bytes(&self) -> u64 {
        match self {
            Self::Saved { bytes, .. } => *bytes,
        }
    }
}
