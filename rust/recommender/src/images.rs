// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lookup of pre-rendered plan images

use std::path::{Component, Path, PathBuf};

/// Outcome of looking up a recommended plan image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanImage {
    Found(PathBuf),
    /// Image not on disk; carries the predicted file name for the warning
    Missing(String),
}

/// Find `file_name` directly inside `dir`.
///
/// Names with directory components never resolve.
pub fn resolve_plan_image(dir: &Path, file_name: &str) -> PlanImage {
    let mut components = Path::new(file_name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    let path = dir.join(file_name);
    if plain && path.is_file() {
        PlanImage::Found(path)
    } else {
        tracing::warn!(dir = %dir.display(), file = file_name, "Plan image not found");
        PlanImage::Missing(file_name.to_string())
    }
}
