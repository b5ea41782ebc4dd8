use std::net::SocketAddr;

use axum::http::{header, HeaderValue, Method};
use axum::{response::Html, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use solar_sizing_api::api_docs::ApiDoc;
use solar_sizing_api::config::Config;
use solar_sizing_api::routes::sizing_routes::sizing_routes;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Load configuration; without a config.json the built-in defaults apply
    let config = match Config::load("config.json") {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("config.json not loaded ({e}); using built-in defaults");
            Config::default()
        }
    };

    // 2. CORS for the known front-end origins.
    // Credentials are allowed, so origins/methods/headers must be explicit
    // lists, never wildcards.
    let origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring unparseable CORS origin: {origin}");
                None
            }
        })
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    // 3. Assemble router: sizing routes + Scalar UI over the OpenAPI doc
    let app = sizing_routes(config.clone())
        .route(
            "/scalar",
            get(|| async { Html(Scalar::new(ApiDoc::openapi()).to_html()) }),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("API server listening on http://{addr}");
    tracing::info!("Scalar UI: http://{addr}/scalar");

    if let Err(e) = axum_server::bind(addr).serve(app.into_make_service()).await {
        tracing::error!("server error: {e}");
    }
}
