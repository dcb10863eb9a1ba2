use std::path::PathBuf;

use tracing::warn;

use crate::internal::hub::enums::ComponentKind;
use crate::internal::hub::structs::{HubClient, HubError, LoadOptions};

/// 拉取某个组件的权重文件。
///
/// `subfolder` 为仓库内子目录（管线组件），单模型仓库传 `None`。
/// `use_safetensors` 为 `None` 时先尝试 safetensors，404 再退回 `.bin`。
pub async fn fetch_weights(
    client: &HubClient,
    repo_id: &str,
    subfolder: Option<&str>,
    kind: ComponentKind,
    options: &LoadOptions,
) -> Result<Option<PathBuf>, HubError> {
    let revision = options.revision_or_default();
    let path_of = |safetensors: bool| {
        kind.weights_stem(safetensors).map(|stem| {
            let file = options.weights_file(stem, safetensors);
            match subfolder {
                Some(dir) => format!("{dir}/{file}"),
                None => file,
            }
        })
    };

    let Some(safetensors_path) = path_of(true) else {
        return Ok(None);
    };

    match options.use_safetensors {
        Some(true) => client
            .fetch_file(repo_id, revision, &safetensors_path)
            .await
            .map(Some),
        Some(false) => {
            let bin_path = path_of(false).unwrap_or(safetensors_path);
            client.fetch_file(repo_id, revision, &bin_path).await.map(Some)
        }
        None => {
            match client
                .fetch_optional_file(repo_id, revision, &safetensors_path)
                .await?
            {
                Some(path) => Ok(Some(path)),
                None => {
                    let bin_path = path_of(false).unwrap_or(safetensors_path);
                    warn!("{repo_id} 没有 safetensors 权重，改用 {bin_path}");
                    client.fetch_file(repo_id, revision, &bin_path).await.map(Some)
                }
            }
        }
    }
}
