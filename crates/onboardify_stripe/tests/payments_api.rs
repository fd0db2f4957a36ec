// Integration tests for the payment routes, with the Stripe API stubbed
// out by httpmock.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use httpmock::prelude::*;
use onboardify_config::{AppConfig, ServerConfig, StripeConfig};
use onboardify_stripe::routes::routes;
use std::sync::Arc;
use tower::ServiceExt;

fn test_config(api_base_url: &str) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        use_tink: false,
        use_stripe: true,
        tink: None,
        stripe: Some(StripeConfig {
            publishable_key: "pk_test_123".to_string(),
            success_url: "https://celestial.se/success".to_string(),
            cancel_url: "https://celestial.se/cancel".to_string(),
            currency: "sek".to_string(),
            payment_amount: 300,
            subscription_amount: 4000,
            product_name: "Onboarding App - Monthly fee".to_string(),
            api_base_url: api_base_url.to_string(),
        }),
    })
}

async fn post_json(app: axum::Router, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_page(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn create_payment_intent_relays_status_and_id() {
    std::env::set_var("STRIPE_SECRET_KEY", "sk_test_dummy");

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/payment_intents")
                .header("content-type", "application/x-www-form-urlencoded");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"id":"pi_1","status":"succeeded"}"#);
        })
        .await;

    let app = routes(test_config(&server.base_url()));
    let (status, body) = post_json(
        app,
        "/create-payment-intent",
        r#"{"payment_method_id":"pm_123"}"#,
    )
    .await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "succeeded");
    assert_eq!(body["id"], "pi_1");
}

#[tokio::test]
async fn create_payment_intent_maps_provider_failure_to_400() {
    std::env::set_var("STRIPE_SECRET_KEY", "sk_test_dummy");

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/payment_intents");
            then.status(402)
                .header("content-type", "application/json")
                .body(r#"{"error":{"message":"Your card was declined.","type":"card_error"}}"#);
        })
        .await;

    let app = routes(test_config(&server.base_url()));
    let (status, body) = post_json(
        app,
        "/create-payment-intent",
        r#"{"payment_method_id":"pm_declined"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("Your card was declined."));
}

#[tokio::test]
async fn create_checkout_session_relays_session_id() {
    std::env::set_var("STRIPE_SECRET_KEY", "sk_test_dummy");

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/checkout/sessions")
                .header("content-type", "application/x-www-form-urlencoded");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"id":"cs_1"}"#);
        })
        .await;

    let app = routes(test_config(&server.base_url()));
    let (status, body) = post_json(app, "/create-checkout-session", "{}").await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "cs_1");
}

#[tokio::test]
async fn create_checkout_session_maps_provider_failure_to_400() {
    std::env::set_var("STRIPE_SECRET_KEY", "sk_test_dummy");

    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v1/checkout/sessions");
            then.status(500).body("internal provider meltdown");
        })
        .await;

    let app = routes(test_config(&server.base_url()));
    let (status, body) = post_json(app, "/create-checkout-session", "{}").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("internal provider meltdown"));
}

#[tokio::test]
async fn payment_pages_embed_publishable_key() {
    let config = test_config("http://unused.invalid");

    let (status, body) = get_page(routes(config.clone()), "/pay-3-kr").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("pk_test_123"));
    assert!(body.contains("/create-payment-intent"));

    let (status, body) = get_page(routes(config), "/subscribe").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("pk_test_123"));
    assert!(body.contains("/create-checkout-session"));
}

#[tokio::test]
async fn success_and_cancel_pages_are_static() {
    let config = test_config("http://unused.invalid");

    let (status, body) = get_page(routes(config.clone()), "/success").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Thank you for subscribing!"));

    let (status, body) = get_page(routes(config), "/cancel").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Subscription cancelled."));
}

#[tokio::test]
async fn payment_routes_answer_503_when_stripe_disabled() {
    let mut config = test_config("http://unused.invalid");
    Arc::get_mut(&mut config).unwrap().use_stripe = false;

    let (status, body) = post_json(
        routes(config),
        "/create-payment-intent",
        r#"{"payment_method_id":"pm_123"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("disabled"));
}
