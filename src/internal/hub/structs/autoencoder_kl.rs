use async_trait::async_trait;

use crate::internal::hub::enums::ComponentKind;
use crate::internal::hub::functions::fetch_weights::fetch_weights;
use crate::internal::hub::traits::pretrained_loader::PretrainedLoader;

use super::hub_client::HubClient;
use super::hub_error::HubError;
use super::load_options::LoadOptions;
use super::pretrained_model::PretrainedModel;

/// 单独发布的 VAE 仓库（如 `madebyollin/sdxl-vae-fp16-fix`）的加载器：
/// 拉取 `config.json` 与 `diffusion_pytorch_model` 权重。
#[derive(Debug, Clone)]
pub struct AutoencoderKl {
    client: HubClient,
}

impl AutoencoderKl {
    pub const CLASS_NAME: &'static str = "AutoencoderKL";

    pub fn new(client: HubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PretrainedLoader for AutoencoderKl {
    type Model = PretrainedModel;

    fn class_name(&self) -> &str {
        Self::CLASS_NAME
    }

    async fn from_pretrained(
        &self,
        model_id: &str,
        options: &LoadOptions,
    ) -> Result<PretrainedModel, HubError> {
        let revision = options.revision_or_default();
        let kind = ComponentKind::DiffusersModel;

        let mut files = Vec::new();
        for (file, _) in kind.config_files() {
            files.push(self.client.fetch_file(model_id, revision, file).await?);
        }
        files.extend(
            fetch_weights(&self.client, model_id, None, kind, options).await?,
        );

        Ok(PretrainedModel {
            model_id: model_id.to_string(),
            class_name: Self::CLASS_NAME.to_string(),
            revision: revision.to_string(),
            precision: options.precision_or_default(),
            root: self.client.repo_root(model_id, revision)?,
            files,
        })
    }
}
