pub mod pretrained_loader;
pub mod retry_class;
