// --- File: crates/onboardify_stripe/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::ErrorResponse;
use crate::logic::{CheckoutSessionResponse, CreatePaymentIntentRequest, PaymentIntentResponse};
use utoipa::OpenApi;

#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "PaymentIntent created and confirmed", body = PaymentIntentResponse),
        (status = 400, description = "Provider call failed", body = ErrorResponse)
    ),
    tag = "Stripe"
)]
fn doc_create_payment_intent_handler() {}

#[utoipa::path(
    post,
    path = "/create-checkout-session",
    responses(
        (status = 200, description = "Subscription Checkout Session created", body = CheckoutSessionResponse),
        (status = 400, description = "Provider call failed", body = ErrorResponse)
    ),
    tag = "Stripe"
)]
fn doc_create_checkout_session_handler() {}

#[utoipa::path(
    get,
    path = "/pay-3-kr",
    responses((status = 200, description = "One-off payment page", content_type = "text/html")),
    tag = "Stripe Pages"
)]
fn doc_pay_page_handler() {}

#[utoipa::path(
    get,
    path = "/subscribe",
    responses((status = 200, description = "Subscription page", content_type = "text/html")),
    tag = "Stripe Pages"
)]
fn doc_subscribe_page_handler() {}

#[utoipa::path(
    get,
    path = "/success",
    responses((status = 200, description = "Checkout success page", content_type = "text/html")),
    tag = "Stripe Pages"
)]
fn doc_checkout_success_handler() {}

#[utoipa::path(
    get,
    path = "/cancel",
    responses((status = 200, description = "Checkout cancellation page", content_type = "text/html")),
    tag = "Stripe Pages"
)]
fn doc_checkout_cancel_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_create_payment_intent_handler,
        doc_create_checkout_session_handler,
        doc_pay_page_handler,
        doc_subscribe_page_handler,
        doc_checkout_success_handler,
        doc_checkout_cancel_handler
    ),
    components(schemas(
        CreatePaymentIntentRequest,
        PaymentIntentResponse,
        CheckoutSessionResponse,
        ErrorResponse
    )),
    tags(
        (name = "Stripe", description = "Stripe payment integration API"),
        (name = "Stripe Pages", description = "User-facing payment pages")
    )
)]
pub struct StripeApiDoc;
