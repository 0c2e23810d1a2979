// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ApiError;
use crate::services;
use crate::types::{PlanParams, PlanResponse};
use crate::AppState;
use axum::{extract::State, Json};

/// POST /api/v1/plans - Generate a floor plan as PNG and PDF.
pub async fn generate(
    State(state): State<AppState>,
    Json(params): Json<PlanParams>,
) -> Result<Json<PlanResponse>, ApiError> {
    tracing::debug!(?params, "Plan request");
    Ok(Json(services::generate(&state, params).await?))
}
