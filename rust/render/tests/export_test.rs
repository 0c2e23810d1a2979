// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Full generation runs writing into temporary output directories.

use planta_core::{Drawing, PlanRequest, SplitPolicy, Typology};
use planta_render::{
    generate_plan, ExportConfig, ExportError, ExportedPlan, PlanExporter, RasterPdfExporter,
};
use std::cell::RefCell;

fn request(typology: Typology) -> PlanRequest {
    PlanRequest {
        frontage: 8.0,
        depth: 10.0,
        typology,
        bedrooms: 3,
        productive_space: true,
    }
}

fn small_exporter(dir: &std::path::Path) -> RasterPdfExporter {
    let mut config = ExportConfig::new(dir);
    config.image_width = 320;
    config.image_height = 240;
    RasterPdfExporter::new(config)
}

#[test]
fn generates_png_and_pdf_named_after_request() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = small_exporter(&dir.path().join("planos_generados"));

    let generated =
        generate_plan(&request(Typology::Compacta), SplitPolicy::Rescale, &exporter).unwrap();

    assert_eq!(
        generated.files.png.file_name().unwrap(),
        "plano_Compacta_8x10_3_prod.png"
    );
    assert_eq!(
        generated.files.pdf.file_name().unwrap(),
        "plano_Compacta_8x10_3_prod.pdf"
    );

    let png = image::open(&generated.files.png).unwrap();
    assert_eq!((png.width(), png.height()), (320, 240));

    let pdf = std::fs::read(&generated.files.pdf).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

#[test]
fn raster_contains_wall_ink() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = small_exporter(dir.path());
    let generated =
        generate_plan(&request(Typology::Compacta), SplitPolicy::Rescale, &exporter).unwrap();

    let png = image::open(&generated.files.png).unwrap().to_luma8();
    let dark = png.pixels().filter(|p| p.0[0] < 128).count();
    assert!(dark > 100, "expected drawn walls, found {} dark pixels", dark);
}

#[test]
fn strict_mode_rejects_mismatched_plot_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = small_exporter(dir.path());

    let result = generate_plan(&request(Typology::Compacta), SplitPolicy::Strict, &exporter);
    assert!(matches!(
        result,
        Err(ExportError::Layout(planta_core::Error::DimensionMismatch { .. }))
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn unsupported_typology_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = small_exporter(dir.path());

    let result = generate_plan(&request(Typology::EnL), SplitPolicy::Rescale, &exporter);
    assert!(matches!(
        result,
        Err(ExportError::Layout(planta_core::Error::UnsupportedTypology(_)))
    ));
}

/// Exporter that records drawings instead of writing files
struct Recording(RefCell<Vec<Drawing>>);

impl PlanExporter for Recording {
    fn export(&self, drawing: &Drawing) -> planta_render::Result<ExportedPlan> {
        self.0.borrow_mut().push(drawing.clone());
        Ok(ExportedPlan {
            png: format!("{}.png", drawing.name).into(),
            pdf: format!("{}.pdf", drawing.name).into(),
        })
    }
}

#[test]
fn exporter_receives_completed_drawing() {
    let recorder = Recording(RefCell::new(Vec::new()));
    let generated =
        generate_plan(&request(Typology::Compacta), SplitPolicy::Rescale, &recorder).unwrap();

    let drawings = recorder.0.borrow();
    assert_eq!(drawings.len(), 1);
    assert_eq!(drawings[0], generated.plan.to_drawing());
    assert_eq!(generated.files.pdf.to_str(), Some("plano_Compacta_8x10_3_prod.pdf"));
}

fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn failed_export_leaves_no_half_pair() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = small_exporter(dir.path());

    // A non-empty directory where the PDF should go makes the final move fail
    let blocker = dir.path().join("plano_Compacta_8x10_3_prod.pdf");
    std::fs::create_dir(&blocker).unwrap();
    std::fs::write(blocker.join("keep"), b"x").unwrap();

    let result = generate_plan(&request(Typology::Compacta), SplitPolicy::Rescale, &exporter);
    assert!(matches!(result, Err(ExportError::Io(_))));

    assert_eq!(file_names(dir.path()), vec!["plano_Compacta_8x10_3_prod.pdf"]);
    assert!(blocker.is_dir());
}

#[test]
fn concurrent_exports_of_one_plan_both_succeed() {
    let dir = tempfile::tempdir().unwrap();
    let exporter = small_exporter(dir.path());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                scope.spawn(|| {
                    generate_plan(&request(Typology::Compacta), SplitPolicy::Rescale, &exporter)
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
    });

    assert_eq!(
        file_names(dir.path()),
        vec!["plano_Compacta_8x10_3_prod.pdf", "plano_Compacta_8x10_3_prod.png"]
    );
    let pdf = std::fs::read(dir.path().join("plano_Compacta_8x10_3_prod.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}
