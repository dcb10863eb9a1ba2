use std::path::PathBuf;

use crate::internal::hub::enums::Precision;

/// 已拉取到本地的预训练模型：文件均位于 `root` 之下。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PretrainedModel {
    pub model_id: String,
    pub class_name: String,
    pub revision: String,
    pub precision: Precision,
    pub root: PathBuf,
    pub files: Vec<PathBuf>,
}
