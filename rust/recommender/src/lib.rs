// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan recommender
//!
//! Maps the answers of the housing form (plot size, terrain shape, desired
//! typology, bedrooms, productive space) to the closest labeled row of a
//! CSV dataset and returns that row's plan image name.
//!
//! # Usage
//!
//! ```rust,ignore
//! use planta_recommender::{recommend, FormInput};
//!
//! let prediction = recommend("dataset.csv".as_ref(), &FormInput::default())?;
//! println!("{}", prediction.plan_file);
//! ```

pub mod cache;
pub mod dataset;
pub mod encoder;
pub mod error;
pub mod form;
pub mod images;
pub mod knn;
pub mod model;

pub use cache::RecommenderCache;
pub use dataset::{Dataset, PlanRecord, REQUIRED_COLUMNS};
pub use encoder::LabelEncoder;
pub use error::{RecommendError, Result};
pub use form::{FormInput, BEDROOM_RANGE, DIMENSION_RANGE, TERRAIN_SHAPES, TYPOLOGY_PREFERENCES};
pub use images::{resolve_plan_image, PlanImage};
pub use knn::NearestNeighbor;
pub use model::{Prediction, Recommender};

use std::path::Path;

/// Load the dataset, fit a fresh model and predict `input` in one go
pub fn recommend(dataset_path: &Path, input: &FormInput) -> Result<Prediction> {
    input.validate()?;
    let dataset = Dataset::load(dataset_path)?;
    Recommender::fit(&dataset)?.predict(input)
}
