//! job-board: 求人検索パネルとAPIクライアントのCLI

pub mod api;
pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod listings;
pub mod render;
