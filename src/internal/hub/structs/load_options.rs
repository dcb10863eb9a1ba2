use crate::internal::hub::enums::Precision;

use super::hub_client::DEFAULT_REVISION;

/// `from_pretrained` 的关键字参数
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub precision: Option<Precision>,
    /// `Some(true)` 只接受 safetensors，`Some(false)` 只接受 `.bin`，`None` 优先 safetensors、缺失时退回 `.bin`
    pub use_safetensors: Option<bool>,
    /// 权重变体，如 `fp16` 对应 `xxx.fp16.safetensors`
    pub variant: Option<String>,
    pub revision: Option<String>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: Precision) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn use_safetensors(mut self, use_safetensors: bool) -> Self {
        self.use_safetensors = Some(use_safetensors);
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    /// 未指定时为 `main`
    pub fn revision_or_default(&self) -> &str {
        self.revision.as_deref().unwrap_or(DEFAULT_REVISION)
    }

    pub fn precision_or_default(&self) -> Precision {
        self.precision.unwrap_or_default()
    }

    /// 拼接权重文件名：`{stem}[.{variant}].{ext}`
    pub fn weights_file(&self, stem: &str, safetensors: bool) -> String {
        let ext = if safetensors { "safetensors" } else { "bin" };
        match self.variant.as_deref() {
            Some(variant) => format!("{stem}.{variant}.{ext}"),
            None => format!("{stem}.{ext}"),
        }
    }
}
