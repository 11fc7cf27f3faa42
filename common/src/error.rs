//! エラー型定義

use thiserror::Error;

use crate::api_error::ApiError;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid filter value: {0}")]
    InvalidFilter(String),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
