// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::Context;
use planta_server::{app, AppState, Config};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug,planta_server=debug"));
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    }

    let config = Config::from_env();

    tracing::info!(
        port = config.port,
        dataset = %config.dataset_path.display(),
        planos_dir = %config.planos_dir.display(),
        output_dir = %config.output_dir.display(),
        image_width = config.image_width,
        image_height = config.image_height,
        "Starting Planta Server"
    );

    if !config.dataset_path.is_file() {
        tracing::warn!(
            dataset = %config.dataset_path.display(),
            "Dataset not found; recommendations will fail until it exists"
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = app(AppState::new(config));

    tracing::info!("Listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
