/// 加载精度；仅随模型记录下来交给使用方，不影响下载哪些文件。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    Float16,
    #[default]
    Float32,
}

/// 管线组件的种类，决定需要拉取哪些文件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Scheduler,
    Tokenizer,
    ImageProcessor,
    /// diffusers 模型（unet、vae 等）
    DiffusersModel,
    /// transformers 模型（文本编码器等）
    TransformersModel,
}

impl ComponentKind {
    /// 按 `model_index.json` 中的 `[library, class]` 判断组件种类；未知的库返回 `None`。
    pub fn classify(library: &str, class_name: &str) -> Option<Self> {
        if class_name.ends_with("Scheduler") {
            return Some(Self::Scheduler);
        }
        if class_name.contains("Tokenizer") {
            return Some(Self::Tokenizer);
        }
        if class_name.ends_with("ImageProcessor")
            || class_name.ends_with("FeatureExtractor")
        {
            return Some(Self::ImageProcessor);
        }

        match library {
            "diffusers" => Some(Self::DiffusersModel),
            "transformers" => Some(Self::TransformersModel),
            _ => None,
        }
    }

    /// 权重文件名主干；不带权重的组件返回 `None`
    pub fn weights_stem(&self, safetensors: bool) -> Option<&'static str> {
        match (self, safetensors) {
            (Self::DiffusersModel, _) => Some("diffusion_pytorch_model"),
            (Self::TransformersModel, true) => Some("model"),
            (Self::TransformersModel, false) => Some("pytorch_model"),
            _ => None,
        }
    }

    /// 需要拉取的配置文件：`(文件名, 是否必需)`
    pub fn config_files(&self) -> &'static [(&'static str, bool)] {
        match self {
            Self::Scheduler => &[("scheduler_config.json", true)],
            Self::Tokenizer => &[
                ("tokenizer_config.json", true),
                ("vocab.json", true),
                ("merges.txt", true),
                ("special_tokens_map.json", false),
            ],
            Self::ImageProcessor => &[("preprocessor_config.json", true)],
            Self::DiffusersModel | Self::TransformersModel => {
                &[("config.json", true)]
            }
        }
    }
}
