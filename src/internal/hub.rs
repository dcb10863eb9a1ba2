//! 模型仓库（Hub）领域模块：按仓库标识解析文件地址、落盘缓存，并由加载器组合成预训练模型。

pub mod enums;
pub mod functions;
pub mod structs;
pub mod traits;
