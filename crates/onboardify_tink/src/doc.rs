// --- File: crates/onboardify_tink/src/doc.rs ---
#![allow(dead_code)]
#![cfg(feature = "openapi")]
use crate::handlers::{CallbackQuery, StartBusinessCheckQuery};
use utoipa::OpenApi;

#[utoipa::path(
    get,
    path = "/start-business-check",
    params(StartBusinessCheckQuery),
    responses(
        (status = 200, description = "HTML anchor linking to the hosted consent page", content_type = "text/html"),
        (status = 503, description = "Tink integration disabled")
    ),
    tag = "Tink"
)]
fn doc_start_business_check_handler() {}

#[utoipa::path(
    get,
    path = "/callback",
    params(CallbackQuery),
    responses(
        (status = 200, description = "Tokens relayed, provider error reflected, or fixed fallback message"),
        (status = 502, description = "Token endpoint unreachable")
    ),
    tag = "Tink"
)]
fn doc_callback_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_start_business_check_handler, doc_callback_handler),
    tags((name = "Tink", description = "Bank-data consent and token exchange"))
)]
pub struct TinkApiDoc;
