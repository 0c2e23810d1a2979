// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planta Server - housing plan recommender and floor-plan generator.
//!
//! # Endpoints
//!
//! - `GET /` - Recommendation form (HTML)
//! - `POST /recommend` - Form submission, HTML result page
//! - `POST /api/v1/recommend` - Recommendation (JSON)
//! - `POST /api/v1/plans` - Generate a floor plan as PNG + PDF
//! - `GET /planos/*` - Pre-rendered plan images
//! - `GET /generados/*` - Generated plans
//! - `GET /api/v1/health` - Health check
//! - `GET /api/v1/info` - API information

use axum::{
    routing::{get, post},
    Router,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use planta_recommender::RecommenderCache;
use planta_render::RasterPdfExporter;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::ApiError;

/// URL prefix of pre-rendered plan images
pub const PLANOS_ROUTE: &str = "/planos";
/// URL prefix of generated plans
pub const GENERADOS_ROUTE: &str = "/generados";

/// Bytes escaped in a single URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// URL of `file_name` under a static route such as [`PLANOS_ROUTE`]
pub fn file_url(route: &str, file_name: &str) -> String {
    format!("{}/{}", route, utf8_percent_encode(file_name, PATH_SEGMENT))
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub recommender: Arc<RecommenderCache>,
    pub exporter: Arc<RasterPdfExporter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            recommender: Arc::new(RecommenderCache::new(&config.dataset_path)),
            exporter: Arc::new(RasterPdfExporter::new(config.export_config())),
            config: Arc::new(config),
        }
    }
}

/// Build the router with all routes and middleware
pub fn app(state: AppState) -> Router {
    let planos = ServeDir::new(&state.config.planos_dir);
    let generados = ServeDir::new(&state.config.output_dir);
    let timeout = Duration::from_secs(state.config.request_timeout_secs);

    Router::new()
        // Recommendation form
        .route("/", get(routes::form::show))
        .route("/recommend", post(routes::form::submit))
        // JSON API
        .route("/api/v1/health", get(routes::health::check))
        .route("/api/v1/info", get(routes::health::info))
        .route("/api/v1/recommend", post(routes::recommend::recommend))
        .route("/api/v1/plans", post(routes::plans::generate))
        // Images
        .nest_service(PLANOS_ROUTE, planos)
        .nest_service(GENERADOS_ROUTE, generados)
        // Middleware
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
