// --- File: crates/onboardify_stripe/src/logic.rs ---
use onboardify_config::StripeConfig;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{error, info};

// Import the StripeError from the error module
use crate::error::StripeError;

// Import the HTTP client from onboardify_common
use onboardify_common::HTTP_CLIENT;

// Conditionally import ToSchema if openapi feature is enabled
#[cfg(feature = "openapi")]
use utoipa::ToSchema;

// --- Data Structures ---

/// Request from our payment page to create and confirm a PaymentIntent.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CreatePaymentIntentRequest {
    #[cfg_attr(feature = "openapi", schema(example = "pm_1NXaBC..."))]
    pub payment_method_id: String,
}

/// Identifier and status of the PaymentIntent, relayed from Stripe.
#[derive(Deserialize, Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct PaymentIntentResponse {
    #[cfg_attr(feature = "openapi", schema(example = "pi_3NXa..."))]
    pub id: String,
    #[cfg_attr(feature = "openapi", schema(example = "succeeded"))]
    pub status: String,
}

/// Identifier of the subscription Checkout Session, relayed from Stripe.
#[derive(Deserialize, Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CheckoutSessionResponse {
    #[cfg_attr(feature = "openapi", schema(example = "cs_test_a1..."))]
    pub id: String,
}

// --- Core Logic Functions ---

fn stripe_secret_key() -> Result<String, StripeError> {
    env::var("STRIPE_SECRET_KEY").map_err(|_| StripeError::ConfigError)
}

/// Extracts `error.message` from a Stripe error body, falling back to the
/// raw body text.
fn extract_error_message(body_text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body_text) {
        Ok(json_body) => json_body
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
            .unwrap_or(body_text)
            .to_string(),
        Err(_) => body_text.to_string(),
    }
}

/// Form body for the create-and-confirm PaymentIntent call.
///
/// The payment method collected on the client is attached and confirmed in
/// the same call, with redirect-based confirmation flows disabled.
fn payment_intent_form(config: &StripeConfig, payment_method_id: &str) -> Vec<(String, String)> {
    vec![
        ("amount".to_string(), config.payment_amount.to_string()),
        ("currency".to_string(), config.currency.to_lowercase()),
        ("payment_method".to_string(), payment_method_id.to_string()),
        ("confirm".to_string(), "true".to_string()),
        (
            "automatic_payment_methods[enabled]".to_string(),
            "true".to_string(),
        ),
        (
            "automatic_payment_methods[allow_redirects]".to_string(),
            "never".to_string(),
        ),
    ]
}

/// Form body for the subscription-mode Checkout Session call: one fixed
/// line item, quantity 1, fixed success/cancel URLs.
fn checkout_session_form(config: &StripeConfig) -> Vec<(String, String)> {
    vec![
        ("payment_method_types[]".to_string(), "card".to_string()),
        ("mode".to_string(), "subscription".to_string()),
        ("success_url".to_string(), config.success_url.clone()),
        ("cancel_url".to_string(), config.cancel_url.clone()),
        (
            "line_items[0][price_data][currency]".to_string(),
            config.currency.to_lowercase(),
        ),
        (
            "line_items[0][price_data][product_data][name]".to_string(),
            config.product_name.clone(),
        ),
        (
            "line_items[0][price_data][unit_amount]".to_string(),
            config.subscription_amount.to_string(),
        ),
        (
            "line_items[0][price_data][recurring][interval]".to_string(),
            "month".to_string(),
        ),
        ("line_items[0][quantity]".to_string(), "1".to_string()),
    ]
}

/// Creates and immediately confirms a fixed-amount PaymentIntent.
pub async fn create_payment_intent(
    config: &StripeConfig,
    payment_method_id: &str,
) -> Result<PaymentIntentResponse, StripeError> {
    info!(
        "[Stripe Logic] Creating PaymentIntent for {} {} (minor units)",
        config.payment_amount, config.currency
    );

    let secret_key = stripe_secret_key()?;
    let api_url = format!("{}/v1/payment_intents", config.api_base_url);

    let response = HTTP_CLIENT
        .post(&api_url)
        .basic_auth(secret_key, None::<&str>)
        .form(&payment_intent_form(config, payment_method_id))
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Stripe Logic] Stripe API response status: {}", status);

    if status.is_success() {
        let intent: PaymentIntentResponse = serde_json::from_str(&body_text)?;
        info!(
            "[Stripe Logic] PaymentIntent {} is {}",
            intent.id, intent.status
        );
        Ok(intent)
    } else {
        let message = extract_error_message(&body_text);
        error!(
            "[Stripe Logic] PaymentIntent creation failed with HTTP status: {}. Message: {}",
            status, message
        );
        Err(StripeError::ApiError {
            status_code: status.as_u16(),
            message,
        })
    }
}

/// Creates a subscription-mode Stripe Checkout Session.
pub async fn create_checkout_session(
    config: &StripeConfig,
) -> Result<CheckoutSessionResponse, StripeError> {
    info!(
        "[Stripe Logic] Creating subscription Checkout Session for '{}'",
        config.product_name
    );

    let secret_key = stripe_secret_key()?;
    let api_url = format!("{}/v1/checkout/sessions", config.api_base_url);

    let response = HTTP_CLIENT
        .post(&api_url)
        .basic_auth(secret_key, None::<&str>)
        .form(&checkout_session_form(config))
        .send()
        .await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Stripe Logic] Stripe API response status: {}", status);

    if status.is_success() {
        let session: CheckoutSessionResponse = serde_json::from_str(&body_text)?;
        info!(
            "[Stripe Logic] Checkout Session created successfully: {}",
            session.id
        );
        Ok(session)
    } else {
        let message = extract_error_message(&body_text);
        error!(
            "[Stripe Logic] Checkout Session creation failed with HTTP status: {}. Message: {}",
            status, message
        );
        Err(StripeError::ApiError {
            status_code: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> StripeConfig {
        StripeConfig {
            publishable_key: "pk_test_123".to_string(),
            success_url: "https://celestial.se/success".to_string(),
            cancel_url: "https://celestial.se/cancel".to_string(),
            currency: "sek".to_string(),
            payment_amount: 300,
            subscription_amount: 4000,
            product_name: "Onboarding App - Monthly fee".to_string(),
            api_base_url: "https://api.stripe.com".to_string(),
        }
    }

    #[test]
    fn payment_intent_form_confirms_with_redirects_disabled() {
        let form = payment_intent_form(&test_config(), "pm_123");

        let get = |key: &str| {
            form.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("amount"), Some("300"));
        assert_eq!(get("currency"), Some("sek"));
        assert_eq!(get("payment_method"), Some("pm_123"));
        assert_eq!(get("confirm"), Some("true"));
        assert_eq!(get("automatic_payment_methods[allow_redirects]"), Some("never"));
    }

    #[test]
    fn checkout_session_form_carries_fixed_line_item() {
        let form = checkout_session_form(&test_config());

        let get = |key: &str| {
            form.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(get("mode"), Some("subscription"));
        assert_eq!(get("line_items[0][price_data][unit_amount]"), Some("4000"));
        assert_eq!(get("line_items[0][price_data][currency]"), Some("sek"));
        assert_eq!(
            get("line_items[0][price_data][product_data][name]"),
            Some("Onboarding App - Monthly fee")
        );
        assert_eq!(get("line_items[0][quantity]"), Some("1"));
        assert_eq!(get("success_url"), Some("https://celestial.se/success"));
        assert_eq!(get("cancel_url"), Some("https://celestial.se/cancel"));
    }

    #[test]
    fn error_message_extraction_prefers_stripe_error_field() {
        let body = r#"{"error":{"message":"Your card was declined.","type":"card_error"}}"#;
        assert_eq!(extract_error_message(body), "Your card was declined.");

        let raw = "upstream fell over";
        assert_eq!(extract_error_message(raw), raw);
    }
}
