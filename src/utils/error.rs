use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Invalid inflation request: {message}")]
    InvalidRequest { message: String },

    #[error("Upstream request failed: {0}")]
    UpstreamUnreachable(#[from] reqwest::Error),

    #[error("BLS API request failed: {message}")]
    UpstreamStatus { message: String },

    #[error("Failed to decode upstream response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidConfigValueError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ProxyError>;
