// --- File: crates/onboardify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Tink Config ---
// Holds non-secret Tink config. Client secret loaded directly from env var:
// TINK_CLIENT_SECRET
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TinkConfig {
    pub client_id: String,    // Mandatory
    pub redirect_uri: String, // Mandatory, registered with Tink
    /// Default market when the request does not supply one.
    #[serde(default = "default_market")]
    pub market: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_input_provider")]
    pub input_provider: String,
    /// Base path of the hosted consent page. Overridable so tests can point
    /// the flow at a stub server.
    #[serde(default = "default_connect_base_url")]
    pub connect_base_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
}

fn default_market() -> String {
    "DE".to_string()
}

fn default_locale() -> String {
    "sv_SE".to_string()
}

fn default_input_provider() -> String {
    "de-demobank-password".to_string()
}

fn default_connect_base_url() -> String {
    "https://link.tink.com/1.0/business-account-check/create-report/".to_string()
}

fn default_token_url() -> String {
    "https://api.tink.com/api/v1/oauth/token".to_string()
}

// --- Stripe Config ---
// Holds non-secret Stripe config. Secret key loaded directly from env var:
// STRIPE_SECRET_KEY
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StripeConfig {
    pub publishable_key: String, // Mandatory, embedded in the payment pages
    pub success_url: String,     // Mandatory
    pub cancel_url: String,      // Mandatory
    #[serde(default = "default_currency")]
    pub currency: String,
    /// One-off charge amount in minor units (300 = 3 kr).
    #[serde(default = "default_payment_amount")]
    pub payment_amount: i64,
    /// Subscription price in minor units per month (4000 = 40 kr).
    #[serde(default = "default_subscription_amount")]
    pub subscription_amount: i64,
    #[serde(default = "default_product_name")]
    pub product_name: String,
    /// Overridable so tests can point API calls at a stub server.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_currency() -> String {
    "sek".to_string()
}

fn default_payment_amount() -> i64 {
    300
}

fn default_subscription_amount() -> i64 {
    4000
}

fn default_product_name() -> String {
    "Onboarding App - Monthly fee".to_string()
}

fn default_api_base_url() -> String {
    "https://api.stripe.com".to_string()
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_tink: bool,
    #[serde(default)]
    pub use_stripe: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub tink: Option<TinkConfig>,
    #[serde(default)]
    pub stripe: Option<StripeConfig>,
}
