// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for recommender operations
pub type Result<T> = std::result::Result<T, RecommendError>;

/// Errors raised while loading the dataset or answering a form
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Cannot read dataset {path}: {source}")]
    DatasetRead {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("Dataset I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Dataset has no rows")]
    EmptyDataset,

    #[error("Invalid {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("Unrecognized value '{value}' for {field}")]
    UnknownCategory { field: &'static str, value: String },
}

impl RecommendError {
    /// True for errors caused by the submitted answers rather than the
    /// dataset or the host
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RecommendError::InvalidField { .. } | RecommendError::UnknownCategory { .. }
        )
    }
}
