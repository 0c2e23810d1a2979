// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request types for the API.

use planta_core::{PlanRequest, SplitPolicy, Typology};
use planta_recommender::FormInput;
use serde::Deserialize;

/// Fields of the HTML recommendation form (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendForm {
    pub frontis: f64,
    pub profundidad: f64,
    pub forma_terreno: String,
    pub tipologia: String,
    pub dormitorios: u32,
    /// Checkbox; browsers omit the field when unchecked.
    #[serde(default)]
    pub productivo: Option<String>,
}

impl From<RecommendForm> for FormInput {
    fn from(form: RecommendForm) -> Self {
        FormInput {
            frontage: form.frontis,
            depth: form.profundidad,
            terrain_shape: form.forma_terreno,
            typology: form.tipologia,
            bedrooms: form.dormitorios,
            productive_space: form.productivo.is_some(),
        }
    }
}

fn default_typology() -> String {
    Typology::Compacta.name().to_string()
}

fn default_bedrooms() -> u32 {
    2
}

/// Body of `POST /api/v1/plans`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlanParams {
    /// Plot frontage (m).
    pub frontage: f64,
    /// Plot depth (m).
    pub depth: f64,
    /// Typology name, e.g. "Compacta" or "En L".
    #[serde(default = "default_typology")]
    pub typology: String,
    #[serde(default = "default_bedrooms")]
    pub bedrooms: u32,
    #[serde(default)]
    pub productive_space: bool,
    /// Reject split sequences that do not add up instead of rescaling.
    #[serde(default)]
    pub strict: bool,
}

impl PlanParams {
    pub fn to_request(&self) -> planta_core::Result<PlanRequest> {
        Ok(PlanRequest {
            frontage: self.frontage,
            depth: self.depth,
            typology: self.typology.parse()?,
            bedrooms: self.bedrooms,
            productive_space: self.productive_space,
        })
    }

    pub fn policy(&self) -> SplitPolicy {
        if self.strict {
            SplitPolicy::Strict
        } else {
            SplitPolicy::Rescale
        }
    }
}
