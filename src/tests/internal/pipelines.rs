//! 端到端：CivitAI 模型 + VAE + refiner，全部指向本地 mock 服务器。

use httpmock::prelude::*;

use crate::hub::Precision;
use crate::tests::{test_config, weights_bytes};
use crate::{
    EnsureOutcome, PONY_MODEL_FILE, REFINER_MODEL_ID, VAE_MODEL_ID,
    get_diffusion_pipelines_from,
};

const CIVITAI_PATH: &str = "/api/download/models/1920896";

const MINIMAL_REFINER_INDEX: &str = r#"{
  "_class_name": "StableDiffusionXLImg2ImgPipeline",
  "scheduler": ["diffusers", "EulerDiscreteScheduler"],
  "unet": ["diffusers", "UNet2DConditionModel"]
}"#;

async fn serve_hub(server: &MockServer) {
    let files = [
        (VAE_MODEL_ID, "config.json", "{}"),
        (VAE_MODEL_ID, "diffusion_pytorch_model.safetensors", "vae"),
        (REFINER_MODEL_ID, "model_index.json", MINIMAL_REFINER_INDEX),
        (REFINER_MODEL_ID, "scheduler/scheduler_config.json", "{}"),
        (REFINER_MODEL_ID, "unet/config.json", "{}"),
        (REFINER_MODEL_ID, "unet/diffusion_pytorch_model.safetensors", "unet"),
    ];

    for (repo_id, file, body) in files {
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(format!("/{repo_id}/resolve/main/{file}"));
                then.status(200).body(body);
            })
            .await;
    }
}

#[tokio::test]
async fn prepares_all_models() {
    let server = MockServer::start_async().await;
    let body = weights_bytes(5_000);
    let civitai = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(CIVITAI_PATH)
                .header("authorization", "Bearer civitai-secret");
            then.status(200).body(&body);
        })
        .await;
    serve_hub(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), Some("civitai-secret"), None);

    let assets = get_diffusion_pipelines_from(&config, &server.url(CIVITAI_PATH))
        .await
        .unwrap();

    assert_eq!(assets.model_outcome, EnsureOutcome::Downloaded);
    assert_eq!(assets.model_path, config.model_dir.join(PONY_MODEL_FILE));
    assert_eq!(std::fs::read(&assets.model_path).unwrap(), body);

    assert_eq!(assets.vae.model_id, VAE_MODEL_ID);
    assert_eq!(assets.vae.precision, Precision::Float16);
    assert_eq!(assets.vae.files.len(), 2);

    assert_eq!(assets.refiner.model_id, REFINER_MODEL_ID);
    assert_eq!(assets.refiner.precision, Precision::Float16);
    assert_eq!(assets.refiner.files.len(), 4);
    civitai.assert_async().await;

    // 第二次运行：模型文件已存在，Hub 文件命中缓存
    let again = get_diffusion_pipelines_from(&config, &server.url(CIVITAI_PATH))
        .await
        .unwrap();
    assert_eq!(again.model_outcome, EnsureOutcome::AlreadyPresent);
    civitai.assert_hits_async(1).await;
}

#[tokio::test]
async fn civitai_failure_does_not_stop_hub_fetch() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(CIVITAI_PATH);
            then.status(500);
        })
        .await;
    serve_hub(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), None, None);

    let assets = get_diffusion_pipelines_from(&config, &server.url(CIVITAI_PATH))
        .await
        .unwrap();

    assert_eq!(assets.model_outcome, EnsureOutcome::Failed);
    assert!(!assets.model_path.exists());
    assert_eq!(assets.refiner.files.len(), 4);
}

#[tokio::test]
async fn hub_failure_is_returned_after_retries() {
    let server = MockServer::start_async().await;
    let civitai = server
        .mock_async(|when, then| {
            when.method(GET).path(CIVITAI_PATH);
            then.status(200).body("weights");
        })
        .await;
    let vae_config = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/{VAE_MODEL_ID}/resolve/main/config.json"));
            then.status(503);
        })
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server, dir.path(), None, None);

    let err = get_diffusion_pipelines_from(&config, &server.url(CIVITAI_PATH))
        .await
        .unwrap_err();

    assert!(err.is_io());
    civitai.assert_hits_async(1).await;
    vae_config.assert_hits_async(3).await;
}
