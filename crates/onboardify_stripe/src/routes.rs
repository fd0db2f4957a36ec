// --- File: crates/onboardify_stripe/src/routes.rs ---

use crate::handlers::{
    checkout_cancel_handler, checkout_success_handler, create_checkout_session_handler,
    create_payment_intent_handler, pay_page_handler, subscribe_page_handler, StripeState,
};
use axum::{
    routing::{get, post},
    Router,
};
use onboardify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the payment flows.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let stripe_state = Arc::new(StripeState { config });

    Router::new()
        .route("/pay-3-kr", get(pay_page_handler))
        .route("/create-payment-intent", post(create_payment_intent_handler))
        .route("/subscribe", get(subscribe_page_handler))
        .route(
            "/create-checkout-session",
            post(create_checkout_session_handler),
        )
        // User-facing redirect endpoints (GET)
        .route("/success", get(checkout_success_handler))
        .route("/cancel", get(checkout_cancel_handler))
        .with_state(stripe_state)
}
