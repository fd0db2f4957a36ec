// --- File: crates/onboardify_tink/src/handlers.rs ---
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use onboardify_common::HttpStatusCode;
use onboardify_config::AppConfig;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::logic::{build_consent_url, exchange_code, ConsentParams, TokenExchange};

// --- State for Tink Handlers ---
// Only needs AppConfig as reqwest::Client is static in onboardify_common
#[derive(Clone)]
pub struct TinkState {
    pub config: Arc<AppConfig>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct StartBusinessCheckQuery {
    pub market: Option<String>,
    pub locale: Option<String>,
    pub input_provider: Option<String>,
}

/// Axum handler that links the browser to the hosted consent page.
#[axum::debug_handler]
pub async fn start_business_check_handler(
    State(state): State<Arc<TinkState>>,
    Query(query): Query<StartBusinessCheckQuery>,
) -> Response {
    if !state.config.use_tink {
        return (StatusCode::SERVICE_UNAVAILABLE, "Tink service is disabled.").into_response();
    }
    let Some(tink_config) = state.config.tink.as_ref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Tink configuration not loaded.",
        )
            .into_response();
    };

    let params = ConsentParams {
        market: query.market.unwrap_or_else(|| tink_config.market.clone()),
        locale: query.locale.unwrap_or_else(|| tink_config.locale.clone()),
        input_provider: query
            .input_provider
            .unwrap_or_else(|| tink_config.input_provider.clone()),
    };

    match build_consent_url(tink_config, &params) {
        Ok(url) => {
            info!(
                "[Tink] Consent URL built for market {} with provider {}",
                params.market, params.input_provider
            );
            Html(format!(
                r#"<a href="{}" target="_blank">Start business account check for {} with provider {}</a>"#,
                url, params.market, params.input_provider
            ))
            .into_response()
        }
        Err(e) => {
            error!("[Tink] Failed to build consent URL: {}", e);
            (
                StatusCode::from_u16(e.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                e.to_string(),
            )
                .into_response()
        }
    }
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
}

/// Axum handler for the redirect back from the consent page.
///
/// Reflects a provider `error` verbatim, exchanges a `code` for tokens,
/// or falls through to a fixed message when neither is present. Tokens
/// are relayed in the response body and never stored.
#[axum::debug_handler]
pub async fn callback_handler(
    State(state): State<Arc<TinkState>>,
    Query(query): Query<CallbackQuery>,
) -> Response {
    info!(
        "[Tink] Callback received. code present: {}, error present: {}",
        query.code.is_some(),
        query.error.is_some()
    );

    if !state.config.use_tink {
        return (StatusCode::SERVICE_UNAVAILABLE, "Tink service is disabled.").into_response();
    }

    if let Some(err_value) = query.error {
        warn!("[Tink] Authentication failed: {}", err_value);
        // Reflected verbatim as plain text, no escaping.
        return format!("Tink authentication failed: {}", err_value).into_response();
    }

    if let Some(code) = query.code {
        let Some(tink_config) = state.config.tink.as_ref() else {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Tink configuration not loaded.",
            )
                .into_response();
        };

        return match exchange_code(tink_config, &code).await {
            Ok(TokenExchange::Granted {
                access_token,
                refresh_token,
            }) => {
                info!("[Tink] Access and refresh tokens received");
                Html(format!(
                    "Access token received: {}<br>Refresh token: {}",
                    access_token, refresh_token
                ))
                .into_response()
            }
            Ok(TokenExchange::Rejected { status, body }) => {
                warn!("[Tink] Token exchange failed: {}, {}", status, body);
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                    format!("Token exchange failed: {}, {}", status, body),
                )
                    .into_response()
            }
            Err(e) => {
                error!("[Tink] Token exchange error: {}", e);
                (
                    StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_GATEWAY),
                    e.to_string(),
                )
                    .into_response()
            }
        };
    }

    info!("[Tink] Callback received without auth code or error");
    "Callback received without auth code or error.".into_response()
}
