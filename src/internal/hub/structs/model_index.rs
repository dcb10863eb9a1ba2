use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::internal::hub::enums::ComponentKind;

use super::hub_error::HubError;

/// 管线仓库根目录下的 `model_index.json`
///
/// 除 `_` 开头的元数据外，值为 `[library, class]` 的键即一个组件子目录；
/// `[null, null]` 表示该组件未随仓库提供。
#[derive(Debug, Clone, Deserialize)]
pub struct ModelIndex {
    #[serde(rename = "_class_name")]
    pub class_name: String,
    #[serde(rename = "_diffusers_version", default)]
    pub diffusers_version: Option<String>,
    #[serde(flatten)]
    pub entries: BTreeMap<String, Value>,
}

/// 管线中的一个组件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineComponent {
    pub name: String,
    pub library: String,
    pub class_name: String,
}

impl PipelineComponent {
    pub fn kind(&self) -> Option<ComponentKind> {
        ComponentKind::classify(&self.library, &self.class_name)
    }

    /// 组件需要的配置文件（仓库内路径, 是否必需）
    pub fn config_paths(&self) -> Result<Vec<(String, bool)>, HubError> {
        let kind = self.kind().ok_or_else(|| HubError::UnsupportedComponent {
            name: self.name.clone(),
            library: self.library.clone(),
        })?;

        Ok(kind
            .config_files()
            .iter()
            .map(|(file, required)| (format!("{}/{file}", self.name), *required))
            .collect())
    }
}

impl ModelIndex {
    pub fn parse(raw: &[u8]) -> Result<Self, HubError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// 按名称排序的组件列表；非 `[string, string]` 形式的条目（配置项、空组件）被忽略
    pub fn components(&self) -> Vec<PipelineComponent> {
        self.entries
            .iter()
            .filter(|(name, _)| !name.starts_with('_'))
            .filter_map(|(name, value)| match value.as_array()?.as_slice() {
                [Value::String(library), Value::String(class_name)] => {
                    Some(PipelineComponent {
                        name: name.clone(),
                        library: library.clone(),
                        class_name: class_name.clone(),
                    })
                }
                _ => None,
            })
            .collect()
    }
}
