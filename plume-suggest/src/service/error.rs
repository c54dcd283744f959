//! Error types for the suggestion-service boundary

/// Errors that can occur during a suggestion-service round trip.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("request failed")]
    Request(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("malformed response payload")]
    MalformedPayload(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
