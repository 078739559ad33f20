use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load catalog data: {0}")]
    DataLoad(String),

    #[error("Http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
