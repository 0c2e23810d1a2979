// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Process-wide fitted model, refitted when the dataset file changes

use crate::dataset::Dataset;
use crate::error::Result;
use crate::model::Recommender;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

#[derive(Debug)]
struct Fitted {
    modified: SystemTime,
    model: Arc<Recommender>,
}

/// Lazily fitted recommender keyed on the dataset's modification time
#[derive(Debug)]
pub struct RecommenderCache {
    path: PathBuf,
    fitted: Mutex<Option<Fitted>>,
}

impl RecommenderCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fitted: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current model, refitting first if the file changed since the last fit
    pub fn get(&self) -> Result<Arc<Recommender>> {
        let modified = std::fs::metadata(&self.path)?.modified()?;

        let mut fitted = self
            .fitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(current) = fitted.as_ref() {
            if current.modified == modified {
                return Ok(current.model.clone());
            }
        }

        let model = Arc::new(Recommender::fit(&Dataset::load(&self.path)?)?);
        tracing::info!(path = %self.path.display(), "Refitted recommender");
        *fitted = Some(Fitted {
            modified,
            model: model.clone(),
        });
        Ok(model)
    }

    /// Drop the fitted model so the next call refits
    pub fn invalidate(&self) {
        let mut fitted = self
            .fitted
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *fitted = None;
    }
}
