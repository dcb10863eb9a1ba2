use url::Url;

/// 远程文件：一个可直接 GET 的下载地址，以及友好化的文件名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub url: Url,
    pub name: String, // 取地址最后一段路径，没有时为空
}

impl RemoteFile {
    pub fn new(url: Url) -> Self {
        let name = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default()
            .to_string();

        Self { url, name }
    }

    /// 解析字符串地址
    pub fn parse(url: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(url)?))
    }
}
