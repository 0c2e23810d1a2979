// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Labeled plan dataset (CSV)

use crate::error::{RecommendError, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

pub const COL_FRONTAGE: &str = "Frontis";
pub const COL_DEPTH: &str = "Profundidad";
pub const COL_TERRAIN: &str = "Forma aproximada del terreno";
pub const COL_TYPOLOGY: &str = "Tipología de planta deseada";
pub const COL_BEDROOMS: &str = "Dormitorios";
pub const COL_PRODUCTIVE: &str = "Espacio productivo";
pub const COL_PLAN: &str = "Nombre del plano";

/// Columns every dataset file must carry
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_FRONTAGE,
    COL_DEPTH,
    COL_TERRAIN,
    COL_TYPOLOGY,
    COL_BEDROOMS,
    COL_PRODUCTIVE,
    COL_PLAN,
];

/// One labeled row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRecord {
    #[serde(rename = "Frontis")]
    pub frontage: f64,
    #[serde(rename = "Profundidad")]
    pub depth: f64,
    #[serde(rename = "Forma aproximada del terreno")]
    pub terrain_shape: String,
    #[serde(rename = "Tipología de planta deseada")]
    pub typology: String,
    #[serde(rename = "Dormitorios")]
    pub bedrooms: u32,
    /// "Sí" or "No"
    #[serde(rename = "Espacio productivo")]
    pub productive_space: String,
    #[serde(rename = "Nombre del plano")]
    pub plan_file: String,
}

impl PlanRecord {
    pub fn area(&self) -> f64 {
        self.frontage * self.depth
    }
}

/// All rows of a dataset file
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<PlanRecord>,
}

impl Dataset {
    /// Load a UTF-8 CSV file with the [`REQUIRED_COLUMNS`]
    pub fn load(path: &Path) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| RecommendError::DatasetRead {
                path: path.display().to_string(),
                source,
            })?;
        let dataset = Self::from_csv(reader)?;
        tracing::debug!(path = %path.display(), rows = dataset.len(), "Loaded dataset");
        Ok(dataset)
    }

    /// Parse CSV content from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_csv(
            csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(reader),
        )
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h.trim_start_matches('\u{feff}') == column) {
                return Err(RecommendError::MissingColumn(column.to_string()));
            }
        }

        let records = reader
            .deserialize::<PlanRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if records.is_empty() {
            return Err(RecommendError::EmptyDataset);
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
