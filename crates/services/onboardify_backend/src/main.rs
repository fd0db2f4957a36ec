// File: services/onboardify_backend/src/main.rs
use axum::{response::Html, routing::get, Router};
use onboardify_config::load_config;
#[cfg(feature = "stripe")]
use onboardify_stripe::routes as stripe_routes;
#[cfg(feature = "tink")]
use onboardify_tink::routes as tink_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Navigation page linking the onboarding flows.
async fn index_handler() -> Html<&'static str> {
    Html(
        r#"<h1>Welcome to the Onboarding app</h1>
<p><a href="/start-business-check">Try Tink (bank data)</a></p>
<p><a href="/pay-3-kr">Try a payment (3 kr)</a></p>
<p><a href="/subscribe">Subscribe (40 kr/month)</a></p>
"#,
    )
}

#[tokio::main]
async fn main() {
    onboardify_common::logging::init();

    let config = Arc::new(load_config().expect("Failed to load config"));

    let router = Router::new().route("/", get(index_handler));
    #[cfg(feature = "tink")]
    let router = router.merge(tink_routes::routes(config.clone()));
    #[cfg(feature = "stripe")]
    let router = router.merge(stripe_routes::routes(config.clone()));

    // Request tracing doubles as the access log.
    #[allow(unused_mut)] // for the openapi feature it needs to be mutable
    let mut app = router.layer(TraceLayer::new_for_http());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        #[cfg(feature = "stripe")]
        use onboardify_stripe::doc::StripeApiDoc;
        #[cfg(feature = "tink")]
        use onboardify_tink::doc::TinkApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Onboardify API",
                version = "0.1.0",
                description = "Onboarding demo: bank-data consent and payment flows",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags((name = "Onboardify", description = "Core service endpoints"))
        )]
        struct ApiDoc;

        #[allow(unused_mut)] // for the features it needs to be mutable
        let mut openapi_doc = ApiDoc::openapi();
        #[cfg(feature = "tink")]
        openapi_doc.merge(TinkApiDoc::openapi());
        #[cfg(feature = "stripe")]
        openapi_doc.merge(StripeApiDoc::openapi());

        info!("Adding Swagger UI at /docs");
        let swagger_ui = SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
