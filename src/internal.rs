pub mod auth;
pub mod config;
pub mod entrance;
pub mod hub;
pub mod remote_file;
pub mod states;
