// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export pipeline: drawing -> PNG + PDF in an output directory

use crate::error::Result;
use crate::pdf::image_to_pdf;
use crate::raster::{rasterize_svg, save_png, to_rgb};
use crate::session::ExportSession;
use crate::svg::drawing_to_svg;
use planta_core::{generate_layout, Drawing, FloorPlan, PlanRequest, SplitPolicy};
use std::path::PathBuf;

/// Default raster width (px)
pub const DEFAULT_IMAGE_WIDTH: u32 = 1600;
/// Default raster height (px)
pub const DEFAULT_IMAGE_HEIGHT: u32 = 1200;

/// Where and how large plans are exported
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub image_width: u32,
    pub image_height: u32,
}

impl ExportConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            image_width: DEFAULT_IMAGE_WIDTH,
            image_height: DEFAULT_IMAGE_HEIGHT,
        }
    }

    /// Output directory from `PLANTA_OUTPUT_DIR`, defaulting to
    /// `./planos_generados`
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("PLANTA_OUTPUT_DIR").unwrap_or_else(|_| "planos_generados".into()),
        )
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Files produced for one plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedPlan {
    pub png: PathBuf,
    pub pdf: PathBuf,
}

/// Turns a finished drawing into files
pub trait PlanExporter {
    /// Export `drawing`, naming the files after `drawing.name`
    fn export(&self, drawing: &Drawing) -> Result<ExportedPlan>;
}

/// SVG -> raster PNG -> image PDF exporter
#[derive(Debug, Clone)]
pub struct RasterPdfExporter {
    config: ExportConfig,
}

impl RasterPdfExporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }
}

impl PlanExporter for RasterPdfExporter {
    fn export(&self, drawing: &Drawing) -> Result<ExportedPlan> {
        let start = std::time::Instant::now();
        let mut session = ExportSession::open(&self.config.output_dir, &drawing.name)?;

        let svg = drawing_to_svg(drawing, self.config.image_width, self.config.image_height);
        let raster = rasterize_svg(&svg)?;

        let png = session.path("png");
        let pdf = session.path("pdf");

        save_png(&raster, &session.stage("png"))?;
        let pdf_bytes = image_to_pdf(&to_rgb(&raster))?;
        session.write("pdf", &pdf_bytes)?;

        session.commit()?;
        tracing::info!(
            png = %png.display(),
            pdf = %pdf.display(),
            width = raster.width(),
            height = raster.height(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Exported plan"
        );
        Ok(ExportedPlan { png, pdf })
    }
}

/// A laid out and exported plan
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: FloorPlan,
    pub files: ExportedPlan,
}

/// Lay out `request`, draw it and export it with `exporter`
pub fn generate_plan(
    request: &PlanRequest,
    policy: SplitPolicy,
    exporter: &dyn PlanExporter,
) -> Result<GeneratedPlan> {
    let plan = generate_layout(request, policy)?;
    let drawing = plan.to_drawing();
    let files = exporter.export(&drawing)?;
    Ok(GeneratedPlan { plan, files })
}
