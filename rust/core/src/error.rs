// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out a floor plan
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid plot dimension {name}: {value} m")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("Plot too small: {name} is {value_mm} mm, needs more than {min_mm} mm")]
    PlotTooSmall {
        name: &'static str,
        value_mm: f64,
        min_mm: f64,
    },

    #[error("Split sequence is empty")]
    EmptySplits,

    #[error("Split {index} must be positive, got {value}")]
    NonPositiveSplit { index: usize, value: f64 },

    #[error("Dimension mismatch: splits sum to {sum} but dimension is {dimension}")]
    DimensionMismatch { dimension: f64, sum: f64 },

    #[error("Cell index out of range: {axis} interval {index} (grid has {len})")]
    CellOutOfRange {
        axis: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Typology '{0}' has no layout table yet")]
    UnsupportedTypology(String),

    #[error("Unknown typology: {0}")]
    UnknownTypology(String),

    #[error("Bedroom count must be at least 1, got {0}")]
    InvalidBedroomCount(u32),
}
