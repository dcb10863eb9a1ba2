pub mod config_error;
pub mod fetch_config;
