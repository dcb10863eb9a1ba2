use model_fetch::config::FetchConfig;
use model_fetch::get_diffusion_pipelines;
use model_fetch::hub::HubError;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), HubError> {
    // 工作目录下有 .env 时先加载
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("model_fetch=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = FetchConfig::from_env()?;
    info!(?config, "使用配置");

    let assets = get_diffusion_pipelines(&config).await?;
    info!(
        model = %assets.model_path.display(),
        outcome = ?assets.model_outcome,
        refiner_files = assets.refiner.files.len(),
        vae_files = assets.vae.files.len(),
        "全部完成"
    );

    Ok(())
}
