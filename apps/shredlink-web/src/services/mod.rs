pub mod clipboard;
pub mod config;
pub mod storage;
