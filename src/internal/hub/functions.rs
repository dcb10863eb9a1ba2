pub mod fetch_pretrained;
pub mod fetch_weights;
