// --- File: crates/onboardify_stripe/src/lib.rs ---

pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod routes;

// Re-export for main backend
pub use error::StripeError;
pub use handlers::StripeState;
pub use logic::{CheckoutSessionResponse, CreatePaymentIntentRequest, PaymentIntentResponse};
pub use routes::routes;
