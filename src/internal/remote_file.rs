pub mod downloader;
pub mod structs;
