//! SDK error types. No retry or recovery lives here; every failure
//! propagates to the caller as one of these variants.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// No API key available for the named provider.
    #[error("missing API key for provider '{0}'")]
    MissingApiKey(String),

    /// Registry lookup for an unregistered provider ID.
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// The provider API answered with a non-success status.
    #[error("provider error: {message}")]
    Provider { message: String },

    /// The provider answered 2xx but the body is missing required parts
    /// (no output items, no content segments).
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// Transport-level failure from the HTTP client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body did not deserialize into the expected wire shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn provider_error(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }
}
