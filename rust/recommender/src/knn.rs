// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 1-nearest-neighbour classifier

use crate::error::{RecommendError, Result};

/// Number of features per sample
pub const FEATURES: usize = 5;

pub type FeatureVector = [f64; FEATURES];

/// k = 1 nearest neighbour under Euclidean distance.
///
/// Ties go to the earliest training sample.
#[derive(Debug, Clone)]
pub struct NearestNeighbor {
    samples: Vec<FeatureVector>,
    labels: Vec<String>,
}

/// Closest training sample
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<'a> {
    pub index: usize,
    pub label: &'a str,
    pub distance: f64,
}

impl NearestNeighbor {
    pub fn fit(samples: Vec<FeatureVector>, labels: Vec<String>) -> Result<Self> {
        if samples.is_empty() {
            return Err(RecommendError::EmptyDataset);
        }
        debug_assert_eq!(samples.len(), labels.len());
        Ok(Self { samples, labels })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn predict(&self, query: &FeatureVector) -> Neighbor<'_> {
        let mut best = 0;
        let mut best_d2 = f64::INFINITY;
        for (i, sample) in self.samples.iter().enumerate() {
            let d2: f64 = sample
                .iter()
                .zip(query)
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            if d2 < best_d2 {
                best = i;
                best_d2 = d2;
            }
        }

        Neighbor {
            index: best,
            label: &self.labels[best],
            distance: best_d2.sqrt(),
        }
    }
}
