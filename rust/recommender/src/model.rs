// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fitted recommender: label encoders + 1-NN over the dataset

use crate::dataset::{Dataset, COL_PRODUCTIVE, COL_TERRAIN, COL_TYPOLOGY};
use crate::encoder::LabelEncoder;
use crate::error::Result;
use crate::form::FormInput;
use crate::knn::{FeatureVector, NearestNeighbor};
use serde::Serialize;

/// Predicted plan
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Prediction {
    /// Plan image file name from the matched row
    pub plan_file: String,
    /// Index of the matched dataset row
    pub row: usize,
    /// Distance in feature space
    pub distance: f64,
}

/// Model fitted on one dataset
#[derive(Debug, Clone)]
pub struct Recommender {
    terrain: LabelEncoder,
    typology: LabelEncoder,
    productive: LabelEncoder,
    model: NearestNeighbor,
}

impl Recommender {
    /// Fit encoders and the classifier on every row of `dataset`.
    ///
    /// Features: area, terrain shape, typology, bedrooms, productive space.
    pub fn fit(dataset: &Dataset) -> Result<Self> {
        let records = &dataset.records;
        let terrain = LabelEncoder::fit(COL_TERRAIN, records.iter().map(|r| r.terrain_shape.as_str()));
        let typology = LabelEncoder::fit(COL_TYPOLOGY, records.iter().map(|r| r.typology.as_str()));
        let productive =
            LabelEncoder::fit(COL_PRODUCTIVE, records.iter().map(|r| r.productive_space.as_str()));

        let mut samples = Vec::with_capacity(records.len());
        let mut labels = Vec::with_capacity(records.len());
        for record in records {
            samples.push([
                record.area(),
                terrain.transform(&record.terrain_shape)? as f64,
                typology.transform(&record.typology)? as f64,
                record.bedrooms as f64,
                productive.transform(&record.productive_space)? as f64,
            ]);
            labels.push(record.plan_file.clone());
        }

        let model = NearestNeighbor::fit(samples, labels)?;
        tracing::debug!(
            rows = model.len(),
            terrain_classes = terrain.classes().len(),
            typology_classes = typology.classes().len(),
            "Fitted recommender"
        );

        Ok(Self {
            terrain,
            typology,
            productive,
            model,
        })
    }

    /// Validate `input` and encode it like the training rows
    pub fn encode(&self, input: &FormInput) -> Result<FeatureVector> {
        input.validate()?;
        Ok([
            input.area(),
            self.terrain.transform(&input.terrain_shape)? as f64,
            self.typology.transform(&input.typology)? as f64,
            input.bedrooms as f64,
            self.productive.transform(input.productive_label())? as f64,
        ])
    }

    pub fn predict(&self, input: &FormInput) -> Result<Prediction> {
        let features = self.encode(input)?;
        let neighbor = self.model.predict(&features);

        tracing::info!(
            plan = neighbor.label,
            row = neighbor.index,
            distance = neighbor.distance,
            "Recommended plan"
        );
        Ok(Prediction {
            plan_file: neighbor.label.to_string(),
            row: neighbor.index,
            distance: neighbor.distance,
        })
    }
}
