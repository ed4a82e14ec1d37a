use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid color value: {0}")]
    InvalidColor(String),

    #[error("Theme config error: {0}")]
    ThemeConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
