use std::path::PathBuf;

use tracing::{info, warn};

use crate::internal::config::structs::fetch_config::FetchConfig;
use crate::internal::hub::enums::Precision;
use crate::internal::hub::functions::fetch_pretrained::fetch_pretrained;
use crate::internal::hub::structs::{
    AutoencoderKl, HubClient, HubError, LoadOptions, PretrainedModel,
    StableDiffusionXlImg2ImgPipeline,
};

use super::civitai::{CIVITAI_MODEL_URL, EnsureOutcome, PONY_MODEL_FILE, ensure_model_file};

/// 单独下载的 fp16 VAE
pub const VAE_MODEL_ID: &str = "madebyollin/sdxl-vae-fp16-fix";

/// SDXL refiner
pub const REFINER_MODEL_ID: &str = "stabilityai/stable-diffusion-xl-refiner-1.0";

/// 一次完整准备得到的模型资源
#[derive(Debug, Clone)]
pub struct DiffusionAssets {
    /// CivitAI 模型文件路径（下载失败时文件可能不存在）
    pub model_path: PathBuf,
    pub model_outcome: EnsureOutcome,
    pub refiner: PretrainedModel,
    pub vae: PretrainedModel,
}

/// 本库主入口：下载 Pony Realism 模型，并拉取 VAE 与 refiner。
///
/// CivitAI 下载失败只记录日志，不中断后续步骤；Hub 拉取失败（重试后）直接返回错误。
pub async fn get_diffusion_pipelines(
    config: &FetchConfig,
) -> Result<DiffusionAssets, HubError> {
    get_diffusion_pipelines_from(config, CIVITAI_MODEL_URL).await
}

/// 同 [`get_diffusion_pipelines`]，可指定 CivitAI 下载地址。
pub async fn get_diffusion_pipelines_from(
    config: &FetchConfig,
    civitai_url: &str,
) -> Result<DiffusionAssets, HubError> {
    let model_path = config.model_dir.join(PONY_MODEL_FILE);
    let model_outcome = ensure_model_file(config, &model_path, civitai_url).await;
    if model_outcome == EnsureOutcome::Failed {
        warn!("Pony Realism 模型未能下载，继续拉取其余模型");
    }

    let client = HubClient::from_config(config)?;

    let vae = fetch_pretrained(
        &AutoencoderKl::new(client.clone()),
        VAE_MODEL_ID,
        &LoadOptions::new().precision(Precision::Float16),
    )
    .await?;

    let refiner = fetch_pretrained(
        &StableDiffusionXlImg2ImgPipeline::new(client),
        REFINER_MODEL_ID,
        &LoadOptions::new()
            .precision(Precision::Float16)
            .use_safetensors(true),
    )
    .await?;

    info!(
        vae = %vae.root.display(),
        refiner = %refiner.root.display(),
        "模型准备完成"
    );

    Ok(DiffusionAssets {
        model_path,
        model_outcome,
        refiner,
        vae,
    })
}
