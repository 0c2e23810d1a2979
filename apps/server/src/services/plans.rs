// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-plan generation for the HTTP API.

use crate::error::ApiError;
use crate::types::{PlanParams, PlanResponse};
use crate::{file_url, AppState, GENERADOS_ROUTE};
use planta_render::generate_plan;
use std::path::Path;
use std::time::Instant;

fn file_name(path: &Path) -> Result<String, ApiError> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| ApiError::Internal(format!("Unexpected output path {}", path.display())))
}

/// Lay out, draw and export a plan on the blocking pool.
pub async fn generate(state: &AppState, params: PlanParams) -> Result<PlanResponse, ApiError> {
    let start = Instant::now();
    let request = params.to_request()?;
    let policy = params.policy();

    let exporter = state.exporter.clone();
    let generated = tokio::task::spawn_blocking(move || {
        generate_plan(&request, policy, exporter.as_ref())
    })
    .await??;

    let plan = generated.plan;
    let missing = plan.bedrooms_missing();
    let warning = (missing > 0).then(|| {
        format!(
            "{} admite {} dormitorios; faltan {}",
            plan.request.typology, plan.bedrooms_placed, missing
        )
    });

    Ok(PlanResponse {
        name: plan.request.file_stem(),
        typology: plan.request.typology.name().to_string(),
        png_url: file_url(GENERADOS_ROUTE, &file_name(&generated.files.png)?),
        pdf_url: file_url(GENERADOS_ROUTE, &file_name(&generated.files.pdf)?),
        labels: plan.labels,
        interior_walls: plan.interior_walls,
        productive_space: plan.productive_space,
        bedrooms_requested: plan.request.bedrooms,
        bedrooms_placed: plan.bedrooms_placed,
        warning,
        elapsed_ms: start.elapsed().as_millis() as u64,
    })
}
