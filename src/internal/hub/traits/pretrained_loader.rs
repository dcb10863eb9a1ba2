use async_trait::async_trait;

use crate::internal::hub::structs::{HubError, LoadOptions};

/// 预训练模型加载器：按仓库标识拉取并组装一个模型。
///
/// 重试不在加载器内部处理，见 [`fetch_pretrained`](crate::hub::fetch_pretrained)。
#[async_trait]
pub trait PretrainedLoader: Send + Sync {
    type Model: Send;

    /// 加载器对应的模型类名，如 `AutoencoderKL`
    fn class_name(&self) -> &str;

    async fn from_pretrained(
        &self,
        model_id: &str,
        options: &LoadOptions,
    ) -> Result<Self::Model, HubError>;
}
