use thiserror::Error;

/// Fallback shown to the user when a failure carries no better message.
pub const FETCH_FAILURE_MESSAGE: &str = "운명 데이터를 가져오지 못했습니다.";

#[derive(Error, Debug)]
pub enum FortuneError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Upstream returned {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Upstream response missing expected content: {message}")]
    UpstreamShape { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, FortuneError>;

impl FortuneError {
    /// Errors worth another attempt: rate limiting, upstream 5xx, and
    /// transport-level failures. Shape and validation errors are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            FortuneError::UpstreamStatus { status, .. } => *status == 429 || *status >= 500,
            FortuneError::ApiError(e) => !(e.is_builder() || e.is_decode() || e.is_status()),
            _ => false,
        }
    }

    /// Message suitable for showing to the end user, without diagnostics.
    pub fn user_message(&self) -> String {
        match self {
            FortuneError::UpstreamStatus { message, .. } => message.clone(),
            FortuneError::ValidationError { message } => message.clone(),
            _ => FETCH_FAILURE_MESSAGE.to_string(),
        }
    }
}
