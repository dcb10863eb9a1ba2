pub mod civitai;
pub mod pipelines;
