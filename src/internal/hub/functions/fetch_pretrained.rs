use tracing::info;

use crate::internal::hub::structs::{HubError, LoadOptions, RetryPolicy};
use crate::internal::hub::traits::pretrained_loader::PretrainedLoader;

/// 调用加载器拉取预训练模型，I/O 类错误最多尝试 3 次，其余错误立即返回。
pub async fn fetch_pretrained<L>(
    loader: &L,
    model_id: &str,
    options: &LoadOptions,
) -> Result<L::Model, HubError>
where
    L: PretrainedLoader + ?Sized,
{
    fetch_pretrained_with(&RetryPolicy::default(), loader, model_id, options).await
}

/// 同 [`fetch_pretrained`]，使用自定义重试策略。
pub async fn fetch_pretrained_with<L>(
    policy: &RetryPolicy,
    loader: &L,
    model_id: &str,
    options: &LoadOptions,
) -> Result<L::Model, HubError>
where
    L: PretrainedLoader + ?Sized,
{
    info!("正在加载 {} `{model_id}`", loader.class_name());
    policy
        .run(|_| loader.from_pretrained(model_id, options))
        .await
}
