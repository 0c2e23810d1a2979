// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Recommendation form answers and their validation

use crate::error::{RecommendError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted plot frontage and depth (m)
pub const DIMENSION_RANGE: RangeInclusive<f64> = 2.0..=100.0;
/// Accepted bedroom counts
pub const BEDROOM_RANGE: RangeInclusive<u32> = 2..=5;

pub const TERRAIN_SHAPES: [&str; 4] = ["Cuadrado", "Rectangular", "Alargado", "Irregular"];

pub const TYPOLOGY_PREFERENCES: [&str; 5] =
    ["No especifica", "Compacta", "En L", "En U", "Lineal (I)"];

pub const PRODUCTIVE_YES: &str = "Sí";
pub const PRODUCTIVE_NO: &str = "No";

/// Answers submitted through the recommendation form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormInput {
    /// Plot frontage (m)
    pub frontage: f64,
    /// Plot depth (m)
    pub depth: f64,
    pub terrain_shape: String,
    pub typology: String,
    pub bedrooms: u32,
    #[serde(default)]
    pub productive_space: bool,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            frontage: 8.0,
            depth: 10.0,
            terrain_shape: TERRAIN_SHAPES[0].to_string(),
            typology: TYPOLOGY_PREFERENCES[0].to_string(),
            bedrooms: 2,
            productive_space: false,
        }
    }
}

impl FormInput {
    pub fn area(&self) -> f64 {
        self.frontage * self.depth
    }

    /// Dataset spelling of the productive-space answer
    pub fn productive_label(&self) -> &'static str {
        if self.productive_space {
            PRODUCTIVE_YES
        } else {
            PRODUCTIVE_NO
        }
    }

    /// Check every answer against the form's ranges and option lists
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("frontage", self.frontage), ("depth", self.depth)] {
            if !DIMENSION_RANGE.contains(&value) {
                return Err(RecommendError::InvalidField {
                    field,
                    message: format!(
                        "{} m is outside {}..={} m",
                        value,
                        DIMENSION_RANGE.start(),
                        DIMENSION_RANGE.end()
                    ),
                });
            }
        }
        if !TERRAIN_SHAPES.contains(&self.terrain_shape.as_str()) {
            return Err(RecommendError::InvalidField {
                field: "terrain_shape",
                message: format!("'{}' is not one of {:?}", self.terrain_shape, TERRAIN_SHAPES),
            });
        }
        if !TYPOLOGY_PREFERENCES.contains(&self.typology.as_str()) {
            return Err(RecommendError::InvalidField {
                field: "typology",
                message: format!("'{}' is not one of {:?}", self.typology, TYPOLOGY_PREFERENCES),
            });
        }
        if !BEDROOM_RANGE.contains(&self.bedrooms) {
            return Err(RecommendError::InvalidField {
                field: "bedrooms",
                message: format!(
                    "{} is outside {}..={}",
                    self.bedrooms,
                    BEDROOM_RANGE.start(),
                    BEDROOM_RANGE.end()
                ),
            });
        }
        Ok(())
    }
}
