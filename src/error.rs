use job_board_common::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobBoardError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("求人が見つかりません: id={0}")]
    ListingNotFound(u32),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Common(#[from] job_board_common::Error),
}

pub type Result<T> = std::result::Result<T, JobBoardError>;
