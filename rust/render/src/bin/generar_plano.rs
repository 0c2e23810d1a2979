// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: generate a parametric floor plan as PNG + PDF
//!
//! Usage:
//!   generar-plano <frontis> <profundidad> [options]

use anyhow::Context;
use clap::Parser;
use planta_core::{SplitPolicy, Typology};
use planta_render::{
    generate_plan, ExportConfig, RasterPdfExporter, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "generar-plano", version, about = "Genera un plano de vivienda altoandina")]
struct Args {
    /// Plot frontage in metres
    frontis: f64,

    /// Plot depth in metres
    profundidad: f64,

    /// Plan typology (Compacta, En L, En U, Lineal (I))
    #[arg(long, default_value = "Compacta")]
    tipologia: Typology,

    /// Number of bedrooms
    #[arg(long, default_value_t = 2)]
    dormitorios: u32,

    /// Add the productive-space module
    #[arg(long)]
    productivo: bool,

    /// Output directory (defaults to $PLANTA_OUTPUT_DIR or ./planos_generados)
    #[arg(long)]
    salida: Option<PathBuf>,

    /// Reject plots whose size does not match the typology's reference splits
    #[arg(long)]
    estricto: bool,

    /// Raster width in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_WIDTH)]
    ancho: u32,

    /// Raster height in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_HEIGHT)]
    alto: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match args.salida {
        Some(dir) => ExportConfig::new(dir),
        None => ExportConfig::from_env(),
    };
    config.image_width = args.ancho;
    config.image_height = args.alto;

    let policy = if args.estricto {
        SplitPolicy::Strict
    } else {
        SplitPolicy::Rescale
    };
    let request = planta_core::PlanRequest {
        frontage: args.frontis,
        depth: args.profundidad,
        typology: args.tipologia,
        bedrooms: args.dormitorios,
        productive_space: args.productivo,
    };

    tracing::info!(
        stem = %request.file_stem(),
        output_dir = %config.output_dir.display(),
        ?policy,
        "Generating plan"
    );

    let exporter = RasterPdfExporter::new(config);
    let generated = generate_plan(&request, policy, &exporter)
        .with_context(|| format!("cannot generate {}", request.file_stem()))?;

    if generated.plan.bedrooms_missing() > 0 {
        eprintln!(
            "Aviso: la tipología {} solo admite {} dormitorios",
            request.typology, generated.plan.bedrooms_placed
        );
    }
    println!("{}", generated.files.pdf.display());
    println!("{}", generated.files.png.display());
    Ok(())
}
