pub mod chat_wrappers;
pub mod config;
pub mod core;
pub mod fs_utils;
pub mod vdf;
