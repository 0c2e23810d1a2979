// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while turning a plan into files
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Layout error: {0}")]
    Layout(#[from] planta_core::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("SVG error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("Rasterization failed: {0}")]
    Raster(String),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
