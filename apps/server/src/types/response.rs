// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types for the API.

use planta_core::{ProductiveSpace, RoomLabel, Segment};
use serde::Serialize;

/// Recommended plan and where to find its image.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    /// Plan image file name from the dataset.
    pub plan_file: String,
    /// Whether the image exists in the plans directory.
    pub found: bool,
    pub image_url: Option<String>,
    pub warning: Option<String>,
    /// Distance to the matched dataset row.
    pub distance: f64,
}

/// Generated plan files and layout summary.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    /// File stem shared by the PNG and the PDF.
    pub name: String,
    pub typology: String,
    pub png_url: String,
    pub pdf_url: String,
    pub labels: Vec<RoomLabel>,
    pub interior_walls: Vec<Segment>,
    pub productive_space: Option<ProductiveSpace>,
    pub bedrooms_requested: u32,
    pub bedrooms_placed: u32,
    pub warning: Option<String>,
    pub elapsed_ms: u64,
}
