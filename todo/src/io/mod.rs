//! Storage backends, configuration, and on-disk layout.

pub mod config;
pub mod file_store;
pub mod init;
pub mod memory_store;
pub mod storage;
