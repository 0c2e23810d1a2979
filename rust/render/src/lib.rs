// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan export
//!
//! This crate turns a [`planta_core::Drawing`] into files:
//! 1. The drawing is framed top-down and written as an SVG document
//! 2. The SVG is rasterized at a fixed resolution on white (resvg)
//! 3. The raster is saved as PNG and wrapped into a one-page PDF
//!
//! # Usage
//!
//! ```rust,ignore
//! use planta_core::{PlanRequest, SplitPolicy, Typology};
//! use planta_render::{generate_plan, ExportConfig, RasterPdfExporter};
//!
//! let exporter = RasterPdfExporter::new(ExportConfig::new("planos_generados"));
//! let request = PlanRequest {
//!     frontage: 8.0,
//!     depth: 10.0,
//!     typology: Typology::Compacta,
//!     bedrooms: 3,
//!     productive_space: true,
//! };
//! let generated = generate_plan(&request, SplitPolicy::Rescale, &exporter)?;
//! println!("{}", generated.files.pdf.display());
//! ```

pub mod error;
pub mod export;
pub mod pdf;
pub mod raster;
pub mod session;
pub mod svg;

pub use error::{ExportError, Result};
pub use export::{
    generate_plan, ExportConfig, ExportedPlan, GeneratedPlan, PlanExporter, RasterPdfExporter,
    DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH,
};
pub use pdf::image_to_pdf;
pub use raster::rasterize_svg;
pub use session::ExportSession;
pub use svg::drawing_to_svg;
