pub mod autoencoder_kl;
pub mod hub_client;
pub mod hub_error;
pub mod load_options;
pub mod model_index;
pub mod pretrained_model;
pub mod retry_policy;
pub mod sdxl_img2img_pipeline;

pub use autoencoder_kl::AutoencoderKl;
pub use hub_client::{DEFAULT_REVISION, HubClient};
pub use hub_error::HubError;
pub use load_options::LoadOptions;
pub use model_index::{ModelIndex, PipelineComponent};
pub use pretrained_model::PretrainedModel;
pub use retry_policy::{DEFAULT_MAX_ATTEMPTS, RetryPolicy};
pub use sdxl_img2img_pipeline::StableDiffusionXlImg2ImgPipeline;
