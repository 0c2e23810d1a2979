// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::ApiError;
use crate::services;
use crate::types::RecommendationResponse;
use crate::AppState;
use axum::{extract::State, Json};
use planta_recommender::FormInput;

/// POST /api/v1/recommend - Recommended plan for the form answers.
pub async fn recommend(
    State(state): State<AppState>,
    Json(input): Json<FormInput>,
) -> Result<Json<RecommendationResponse>, ApiError> {
    Ok(Json(services::recommend(&state, input).await?))
}
