// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Health check and API information endpoints.

use crate::AppState;
use axum::{extract::State, Json};
use planta_core::Typology;
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub service: &'static str,
    /// Whether the recommendation dataset is on disk.
    pub dataset: bool,
}

/// API information response.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub supported_typologies: Vec<&'static str>,
    pub endpoints: Vec<EndpointInfo>,
}

/// Endpoint information.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

/// GET /api/v1/health - Health check endpoint.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        service: "planta-server",
        dataset: state.config.dataset_path.is_file(),
    })
}

/// GET /api/v1/info - API information endpoint.
pub async fn info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        service: "planta-server",
        version: env!("CARGO_PKG_VERSION"),
        description: "Andean housing plan recommender and floor-plan generator",
        supported_typologies: Typology::ALL
            .iter()
            .filter(|t| t.table().is_some())
            .map(|t| t.name())
            .collect(),
        endpoints: vec![
            EndpointInfo {
                method: "GET",
                path: "/",
                description: "Recommendation form",
            },
            EndpointInfo {
                method: "POST",
                path: "/recommend",
                description: "Recommendation form submission (HTML)",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/recommend",
                description: "Recommended plan for the form answers",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/v1/plans",
                description: "Generate a floor plan as PNG and PDF",
            },
            EndpointInfo {
                method: "GET",
                path: "/api/v1/health",
                description: "Health check endpoint",
            },
        ],
    })
}
