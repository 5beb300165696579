// src/web/mod.rs
// HTTP layer: the chat UI talks to the reply engine through these routes

pub mod api;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::TherapyConfig;
use crate::error::{Result, TherapyError};

/// Create the web server router. Fails when `OHIO_CORS_ORIGIN` is not a
/// usable header value.
pub fn create_router(config: &TherapyConfig) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(allow_origin(&config.cors_origin)?)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_router = Router::new()
        .route("/welcome", get(api::welcome))
        .route("/chat", post(api::chat))
        .route("/prompt", post(api::prompt));

    Ok(Router::new()
        .route("/", get(api::root))
        .route("/health", get(api::health))
        .nest("/api", api_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

fn allow_origin(origin: &str) -> Result<AllowOrigin> {
    let origin = origin.trim();
    if origin == "*" {
        return Ok(AllowOrigin::from(Any));
    }
    HeaderValue::from_str(origin)
        .map(AllowOrigin::exact)
        .map_err(|_| TherapyError::Config(format!("invalid OHIO_CORS_ORIGIN: {:?}", origin)))
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &TherapyConfig) -> Result<()> {
    let router = create_router(config)?;
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| TherapyError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!("Ohio Therapy API listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
