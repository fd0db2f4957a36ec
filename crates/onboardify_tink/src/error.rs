// --- File: crates/onboardify_tink/src/error.rs ---
use onboardify_common::HttpStatusCode;
use thiserror::Error;

/// Tink-specific error types.
///
/// A non-200 answer from the token endpoint is not an error: the callback
/// route relays the provider's status and body verbatim, so that case is
/// modeled as a [`crate::logic::TokenExchange::Rejected`] outcome instead.
#[derive(Error, Debug)]
pub enum TinkError {
    /// Error occurred while talking to the Tink token endpoint
    #[error("Tink token request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error parsing the token endpoint response
    #[error("Failed to parse Tink token response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Tink configuration
    #[error("Tink configuration missing or incomplete")]
    ConfigError,

    /// Failed to encode the consent URL query string
    #[error("Failed to encode consent URL query string: {0}")]
    EncodingError(String),
}

impl HttpStatusCode for TinkError {
    fn status_code(&self) -> u16 {
        match self {
            TinkError::RequestError(_) => 502,
            TinkError::ParseError(_) => 502,
            TinkError::ConfigError => 500,
            TinkError::EncodingError(_) => 500,
        }
    }
}
