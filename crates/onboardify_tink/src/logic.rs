// --- File: crates/onboardify_tink/src/logic.rs ---
use onboardify_config::TinkConfig;
use serde::Deserialize;
use std::env;
use tracing::info;

use crate::error::TinkError;

// Import the HTTP client from onboardify_common
use onboardify_common::HTTP_CLIENT;

// --- Data Structures ---

/// Resolved consent-page parameters for one request. The handler fills in
/// the configured defaults for anything the query string left out.
#[derive(Debug)]
pub struct ConsentParams {
    pub market: String,
    pub locale: String,
    pub input_provider: String,
}

/// Outcome of one authorization-code exchange.
///
/// `Rejected` carries the provider's own status code and raw body; the
/// callback route relays both to the browser verbatim.
#[derive(Debug)]
pub enum TokenExchange {
    Granted {
        access_token: String,
        refresh_token: String,
    },
    Rejected {
        status: u16,
        body: String,
    },
}

#[derive(Deserialize, Debug)]
struct TokenEndpointBody {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

// --- Core Logic Functions ---

/// Builds the URL of the hosted consent page.
///
/// All parameter values are forwarded verbatim after form-URL-encoding;
/// there is no allow-list, the external provider validates them.
pub fn build_consent_url(config: &TinkConfig, params: &ConsentParams) -> Result<String, TinkError> {
    let query = serde_urlencoded::to_string([
        ("client_id", config.client_id.as_str()),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("market", params.market.as_str()),
        ("locale", params.locale.as_str()),
        ("input_provider", params.input_provider.as_str()),
    ])
    .map_err(|e| TinkError::EncodingError(e.to_string()))?;

    Ok(format!("{}?{}", config.connect_base_url, query))
}

/// Exchanges an authorization code for access/refresh tokens.
///
/// One synchronous form-encoded POST to the token endpoint. Tokens are
/// returned to the caller and never stored.
pub async fn exchange_code(config: &TinkConfig, code: &str) -> Result<TokenExchange, TinkError> {
    let client_secret = env::var("TINK_CLIENT_SECRET").map_err(|_| TinkError::ConfigError)?;

    let form = [
        ("client_id", config.client_id.as_str()),
        ("client_secret", client_secret.as_str()),
        ("grant_type", "authorization_code"),
        ("code", code),
    ];

    info!(
        "[Tink Logic] Exchanging authorization code at {}",
        config.token_url
    );

    let response = HTTP_CLIENT.post(&config.token_url).form(&form).send().await?;

    let status = response.status();
    let body_text = response.text().await?;

    info!("[Tink Logic] Token endpoint responded with status: {}", status);

    if status.is_success() {
        let body: TokenEndpointBody = serde_json::from_str(&body_text)?;
        Ok(TokenExchange::Granted {
            access_token: body.access_token.unwrap_or_default(),
            refresh_token: body.refresh_token.unwrap_or_default(),
        })
    } else {
        info!(
            "[Tink Logic] Token exchange rejected: {} {}",
            status, body_text
        );
        Ok(TokenExchange::Rejected {
            status: status.as_u16(),
            body: body_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TinkConfig {
        TinkConfig {
            client_id: "test-client-id".to_string(),
            redirect_uri: "https://celestial.se/callback".to_string(),
            market: "DE".to_string(),
            locale: "sv_SE".to_string(),
            input_provider: "de-demobank-password".to_string(),
            connect_base_url: "https://link.tink.com/1.0/business-account-check/create-report/"
                .to_string(),
            token_url: "https://api.tink.com/api/v1/oauth/token".to_string(),
        }
    }

    #[test]
    fn consent_url_encodes_all_parameters() {
        let config = test_config();
        let params = ConsentParams {
            market: "DE".to_string(),
            locale: "sv_SE".to_string(),
            input_provider: "de-demobank-password".to_string(),
        };

        let url = build_consent_url(&config, &params).unwrap();

        assert_eq!(
            url,
            "https://link.tink.com/1.0/business-account-check/create-report/\
             ?client_id=test-client-id\
             &redirect_uri=https%3A%2F%2Fcelestial.se%2Fcallback\
             &market=DE&locale=sv_SE&input_provider=de-demobank-password"
        );
    }

    #[test]
    fn consent_url_forwards_arbitrary_values_verbatim_encoded() {
        let config = test_config();
        let params = ConsentParams {
            market: "SE&evil=1".to_string(),
            locale: "en_US".to_string(),
            input_provider: "se-test bank".to_string(),
        };

        let url = build_consent_url(&config, &params).unwrap();

        // No validation, but reserved characters must be encoded so the
        // value survives as a single query parameter.
        assert!(url.contains("market=SE%26evil%3D1"));
        assert!(url.contains("locale=en_US"));
        assert!(url.contains("input_provider=se-test+bank"));
    }
}
