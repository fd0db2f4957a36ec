// --- File: crates/onboardify_stripe/src/error.rs ---
use onboardify_common::HttpStatusCode;
use thiserror::Error;

/// Stripe-specific error types.
#[derive(Error, Debug)]
pub enum StripeError {
    /// Error occurred during a Stripe API request
    #[error("Stripe API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Stripe API
    #[error("Stripe API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing Stripe API response
    #[error("Failed to parse Stripe API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete Stripe configuration
    #[error("Stripe configuration missing or incomplete")]
    ConfigError,

    /// Internal processing error
    #[error("Internal processing error: {0}")]
    InternalError(String),
}

/// The payment routes answer every provider failure with HTTP 400 and a
/// JSON `{error}` body; only local configuration faults map to 500.
impl HttpStatusCode for StripeError {
    fn status_code(&self) -> u16 {
        match self {
            StripeError::RequestError(_) => 400,
            StripeError::ApiError { .. } => 400,
            StripeError::ParseError(_) => 400,
            StripeError::ConfigError => 500,
            StripeError::InternalError(_) => 500,
        }
    }
}
