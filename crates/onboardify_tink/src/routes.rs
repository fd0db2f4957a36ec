// --- File: crates/onboardify_tink/src/routes.rs ---

use crate::handlers::{callback_handler, start_business_check_handler, TinkState};
use axum::{routing::get, Router};
use onboardify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the Tink consent flow.
pub fn routes(config: Arc<AppConfig>) -> Router {
    let tink_state = Arc::new(TinkState { config });

    Router::new()
        .route("/start-business-check", get(start_business_check_handler))
        .route("/callback", get(callback_handler))
        .with_state(tink_state)
}
