// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Form answers -> recommended plan image.

use crate::error::ApiError;
use crate::types::RecommendationResponse;
use crate::{file_url, AppState, PLANOS_ROUTE};
use planta_recommender::{resolve_plan_image, FormInput, PlanImage, RecommendError};

/// Predict the closest plan and look up its image.
///
/// Fitting and dataset reads run on the blocking pool.
pub async fn recommend(
    state: &AppState,
    input: FormInput,
) -> Result<RecommendationResponse, ApiError> {
    input.validate()?;

    let cache = state.recommender.clone();
    let planos_dir = state.config.planos_dir.clone();
    let (prediction, image) = tokio::task::spawn_blocking(move || {
        let prediction = cache.get()?.predict(&input)?;
        let image = resolve_plan_image(&planos_dir, &prediction.plan_file);
        Ok::<_, RecommendError>((prediction, image))
    })
    .await??;

    let response = match image {
        PlanImage::Found(_) => RecommendationResponse {
            image_url: Some(file_url(PLANOS_ROUTE, &prediction.plan_file)),
            plan_file: prediction.plan_file,
            found: true,
            warning: None,
            distance: prediction.distance,
        },
        PlanImage::Missing(name) => RecommendationResponse {
            warning: Some(format!("No se encontró la imagen: {}", name)),
            plan_file: prediction.plan_file,
            found: false,
            image_url: None,
            distance: prediction.distance,
        },
    };
    Ok(response)
}
