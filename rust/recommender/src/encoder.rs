// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Categorical -> integer label encoding

use crate::error::{RecommendError, Result};
use rustc_hash::FxHashMap;

/// Maps each value of a fixed vocabulary to its index in sorted order
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    field: &'static str,
    classes: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl LabelEncoder {
    /// Fit on every value seen for `field`
    pub fn fit<'a, I>(field: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes: Vec<String> = values.into_iter().map(str::to_string).collect();
        classes.sort_unstable();
        classes.dedup();

        let index = classes
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();

        Self {
            field,
            classes,
            index,
        }
    }

    /// Sorted vocabulary
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Encode `value`, failing on anything outside the fitted vocabulary
    pub fn transform(&self, value: &str) -> Result<usize> {
        self.index
            .get(value)
            .copied()
            .ok_or_else(|| RecommendError::UnknownCategory {
                field: self.field,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_sorted_and_unique() {
        let encoder = LabelEncoder::fit("terreno", ["Rectangular", "Cuadrado", "Rectangular", "Alargado"]);
        assert_eq!(encoder.classes(), ["Alargado", "Cuadrado", "Rectangular"]);
        assert_eq!(encoder.transform("Alargado").unwrap(), 0);
        assert_eq!(encoder.transform("Rectangular").unwrap(), 2);
    }

    #[test]
    fn test_unseen_value_is_rejected() {
        let encoder = LabelEncoder::fit("terreno", ["Cuadrado"]);
        let err = encoder.transform("Irregular").unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            RecommendError::UnknownCategory { field: "terreno", ref value } if value == "Irregular"
        ));
    }
}
