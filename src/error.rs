use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for VerifyxError {
    fn from(err: anyhow::Error) -> Self {
        VerifyxError::Other(err.to_string())
    }
}

/// Result type for the verifyx crate
pub type Result<T> = std::result::Result<T, VerifyxError>;
