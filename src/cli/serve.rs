// src/cli/serve.rs
// HTTP server startup

use tracing::info;

use crate::config::TherapyConfig;
use crate::error::Result;
use crate::web;

/// Apply command-line overrides and run the server.
pub async fn run_server(base: &TherapyConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = with_overrides(base, host, port);
    info!(
        bind = %config.bind_address(),
        cors = %config.cors_origin,
        "Starting Ohio Therapy API"
    );
    web::serve(&config).await
}

fn with_overrides(base: &TherapyConfig, host: Option<String>, port: Option<u16>) -> TherapyConfig {
    let mut config = base.clone();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config
}
