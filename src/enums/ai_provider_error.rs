use thiserror::Error;

/// Failure classes of a single chat-completion call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AiProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AiProviderError {
    /// Maps a non-success HTTP status and its body onto a failure class.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            400 => AiProviderError::BadRequest(body),
            401 | 403 => AiProviderError::AuthenticationError(body),
            429 => AiProviderError::RateLimited(body),
            _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, body)),
        }
    }

    /// Short, stable name used in log lines.
    pub fn class(&self) -> &'static str {
        match self {
            AiProviderError::ApiError(_) => "api",
            AiProviderError::NetworkError(_) => "network",
            AiProviderError::SerializationError(_) => "serialization",
            AiProviderError::AuthenticationError(_) => "authentication",
            AiProviderError::RateLimited(_) => "rate_limit",
            AiProviderError::BadRequest(_) => "bad_request",
        }
    }
}
