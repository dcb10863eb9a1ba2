/// 内部实现模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::civitai::*;
pub use internal::entrance::pipelines::*;

pub mod auth {
    use crate::internal;
    pub use internal::auth::structs::auth_error::AuthError;
    pub use internal::auth::structs::bearer_auth::BearerAuth;
}

pub mod config {
    use crate::internal;
    pub use internal::config::structs::config_error::ConfigError;
    pub use internal::config::structs::fetch_config::*;
}

pub mod states {
    pub mod reactive_property {
        use crate::internal;
        pub use internal::states::reactive_property::*;
    }
}

pub mod remote_file {
    use crate::internal;
    // 结构体模型
    pub use internal::remote_file::structs::remote_file::*;
    // 下载器：类型与入口（以 lib 为中心，此处统一导出）
    pub use internal::remote_file::downloader::structs::*;
    pub use internal::remote_file::downloader::traits::*;
}

/// 模型仓库（Hub）访问：客户端、加载器与重试策略
pub mod hub {
    use crate::internal;
    pub use internal::hub::enums::*;
    pub use internal::hub::functions::fetch_pretrained::*;
    pub use internal::hub::functions::fetch_weights::*;
    pub use internal::hub::structs::*;
    pub use internal::hub::traits::pretrained_loader::PretrainedLoader;
    pub use internal::hub::traits::retry_class::RetryClass;
}
