use async_trait::async_trait;
use tracing::debug;

use crate::internal::hub::functions::fetch_weights::fetch_weights;
use crate::internal::hub::traits::pretrained_loader::PretrainedLoader;

use super::hub_client::HubClient;
use super::hub_error::HubError;
use super::load_options::LoadOptions;
use super::model_index::{ModelIndex, PipelineComponent};
use super::pretrained_model::PretrainedModel;

/// 仓库根目录的管线描述文件
const MODEL_INDEX_FILE: &str = "model_index.json";

/// SDXL 图生图管线（如 refiner）的加载器。
///
/// 先拉取 `model_index.json` 并校验 `_class_name`，再逐个组件拉取配置与权重。
#[derive(Debug, Clone)]
pub struct StableDiffusionXlImg2ImgPipeline {
    client: HubClient,
}

impl StableDiffusionXlImg2ImgPipeline {
    pub const CLASS_NAME: &'static str = "StableDiffusionXLImg2ImgPipeline";

    pub fn new(client: HubClient) -> Self {
        Self { client }
    }

    async fn fetch_component(
        &self,
        model_id: &str,
        component: &PipelineComponent,
        options: &LoadOptions,
    ) -> Result<Vec<std::path::PathBuf>, HubError> {
        let revision = options.revision_or_default();
        debug!(
            component = %component.name,
            class = %component.class_name,
            "拉取管线组件"
        );

        let mut files = Vec::new();
        for (path, required) in component.config_paths()? {
            if required {
                files.push(self.client.fetch_file(model_id, revision, &path).await?);
            } else {
                files.extend(
                    self.client
                        .fetch_optional_file(model_id, revision, &path)
                        .await?,
                );
            }
        }

        // config_paths 成功时 kind 必然可识别
        if let Some(kind) = component.kind() {
            files.extend(
                fetch_weights(
                    &self.client,
                    model_id,
                    Some(&component.name),
                    kind,
                    options,
                )
                .await?,
            );
        }

        Ok(files)
    }
}

#[async_trait]
impl PretrainedLoader for StableDiffusionXlImg2ImgPipeline {
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
        let index_path = self
            .client
            .fetch_file(model_id, revision, MODEL_INDEX_FILE)
            .await?;
        let index = ModelIndex::parse(&tokio::fs::read(&index_path).await?)?;

        if index.class_name != Self::CLASS_NAME {
            return Err(HubError::UnexpectedPipeline {
                expected: Self::CLASS_NAME.to_string(),
                actual: index.class_name,
            });
        }

        let mut files = vec![index_path];
        for component in index.components() {
            files.extend(self.fetch_component(model_id, &component, options).await?);
        }

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
