// --- File: crates/onboardify_stripe/src/handlers.rs ---
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use onboardify_common::HttpStatusCode;
use onboardify_config::AppConfig;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::logic::{
    create_checkout_session, create_payment_intent, CheckoutSessionResponse,
    CreatePaymentIntentRequest, PaymentIntentResponse,
};

// --- State for Stripe Handlers ---
// Only needs AppConfig as reqwest::Client is static in onboardify_common
#[derive(Clone)]
pub struct StripeState {
    pub config: Arc<AppConfig>,
}

/// JSON error body for the payment routes.
#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    #[cfg_attr(feature = "openapi", schema(example = "Your card was declined."))]
    pub error: String,
}

fn error_response(status: u16, message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_REQUEST),
        Json(ErrorResponse { error: message }),
    )
}

/// Axum handler to create and confirm a fixed-amount PaymentIntent.
#[axum::debug_handler]
pub async fn create_payment_intent_handler(
    State(state): State<Arc<StripeState>>,
    Json(payload): Json<CreatePaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, (StatusCode, Json<ErrorResponse>)> {
    if !state.config.use_stripe {
        return Err(error_response(503, "Stripe service is disabled.".to_string()));
    }
    let Some(stripe_config) = state.config.stripe.as_ref() else {
        return Err(error_response(
            500,
            "Stripe configuration not loaded.".to_string(),
        ));
    };

    match create_payment_intent(stripe_config, &payload.payment_method_id).await {
        Ok(intent) => Ok(Json(intent)),
        Err(e) => {
            error!("[Stripe] PaymentIntent creation failed: {}", e);
            Err(error_response(e.status_code(), e.to_string()))
        }
    }
}

/// Axum handler to create a subscription-mode Checkout Session.
#[axum::debug_handler]
pub async fn create_checkout_session_handler(
    State(state): State<Arc<StripeState>>,
) -> Result<Json<CheckoutSessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    if !state.config.use_stripe {
        return Err(error_response(503, "Stripe service is disabled.".to_string()));
    }
    let Some(stripe_config) = state.config.stripe.as_ref() else {
        return Err(error_response(
            500,
            "Stripe configuration not loaded.".to_string(),
        ));
    };

    match create_checkout_session(stripe_config).await {
        Ok(session) => Ok(Json(session)),
        Err(e) => {
            error!("[Stripe] Checkout Session creation failed: {}", e);
            Err(error_response(e.status_code(), e.to_string()))
        }
    }
}

// --- Static Pages (Client-Side) ---
// Card details are collected out-of-process by Stripe.js; our backend only
// ever sees the resulting payment-method reference.

const PAY_PAGE_HTML: &str = r#"<h2>Test payment (3 kr)</h2>
<form id="payment-form">
  <div id="card-element"></div>
  <button id="pay-button" type="submit">Pay 3 kr</button>
  <p id="payment-result"></p>
</form>
<script src="https://js.stripe.com/v3/"></script>
<script>
  var stripe = Stripe('__PUBLISHABLE_KEY__');
  var elements = stripe.elements();
  var card = elements.create('card');
  card.mount('#card-element');
  var form = document.getElementById('payment-form');
  form.addEventListener('submit', function(event) {
    event.preventDefault();
    stripe.createPaymentMethod({type: 'card', card: card}).then(function(result) {
      if (result.error) {
        document.getElementById('payment-result').textContent = result.error.message;
        return;
      }
      fetch('/create-payment-intent', {
        method: 'POST',
        headers: {'Content-Type': 'application/json'},
        body: JSON.stringify({payment_method_id: result.paymentMethod.id})
      })
      .then(function(response) { return response.json(); })
      .then(function(data) {
        document.getElementById('payment-result').textContent =
          data.error ? data.error : 'Payment ' + data.status + ' (' + data.id + ')';
      });
    });
  });
</script>
"#;

const SUBSCRIBE_PAGE_HTML: &str = r#"<h2>Subscribe (40 kr/month)</h2>
<button id="subscribe-button">Subscribe</button>
<script src="https://js.stripe.com/v3/"></script>
<script>
  var stripe = Stripe('__PUBLISHABLE_KEY__');
  var button = document.getElementById('subscribe-button');
  button.addEventListener('click', function() {
    fetch('/create-checkout-session', {
      method: 'POST',
      headers: {'Content-Type': 'application/json'},
    })
    .then(function(response) { return response.json(); })
    .then(function(data) {
      stripe.redirectToCheckout({sessionId: data.id});
    });
  });
</script>
"#;

fn render_page(state: &StripeState, template: &str) -> Response {
    if !state.config.use_stripe {
        return (StatusCode::SERVICE_UNAVAILABLE, "Stripe service is disabled.").into_response();
    }
    let Some(stripe_config) = state.config.stripe.as_ref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Stripe configuration not loaded.",
        )
            .into_response();
    };
    Html(template.replace("__PUBLISHABLE_KEY__", &stripe_config.publishable_key)).into_response()
}

/// Serves the one-off payment page with the card element.
#[axum::debug_handler]
pub async fn pay_page_handler(State(state): State<Arc<StripeState>>) -> Response {
    info!("[Stripe] Serving payment page");
    render_page(&state, PAY_PAGE_HTML)
}

/// Serves the subscription page that starts hosted checkout.
#[axum::debug_handler]
pub async fn subscribe_page_handler(State(state): State<Arc<StripeState>>) -> Response {
    info!("[Stripe] Serving subscribe page");
    render_page(&state, SUBSCRIBE_PAGE_HTML)
}

/// Confirmation page, the configured checkout success URL.
#[axum::debug_handler]
pub async fn checkout_success_handler() -> Html<&'static str> {
    info!("[Stripe] User redirected to success URL");
    Html("<h2>Thank you for subscribing!</h2>")
}

/// Cancellation page, the configured checkout cancel URL.
#[axum::debug_handler]
pub async fn checkout_cancel_handler() -> Html<&'static str> {
    info!("[Stripe] User redirected to cancel URL");
    Html("<h2>Subscription cancelled.</h2>")
}
