// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! SVG rasterization and raster image operations

use crate::error::{ExportError, Result};
use image::buffer::ConvertBuffer;
use image::{ImageFormat, RgbImage, RgbaImage};
use resvg::tiny_skia;
use resvg::usvg;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// System fonts, loaded once per process
fn system_fonts() -> Arc<usvg::fontdb::Database> {
    static FONTS: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    FONTS
        .get_or_init(|| {
            let mut db = usvg::fontdb::Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "Loaded system fonts");
            Arc::new(db)
        })
        .clone()
}

/// Rasterize an SVG document onto an opaque white canvas.
///
/// The raster size is the document's `width` x `height`.
pub fn rasterize_svg(svg: &str) -> Result<RgbaImage> {
    let mut opt = usvg::Options::default();
    opt.fontdb = system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        ExportError::Raster(format!(
            "cannot allocate {}x{} pixmap",
            size.width(),
            size.height()
        ))
    })?;
    // Opaque background keeps premultiplied and straight alpha identical
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    RgbaImage::from_raw(size.width(), size.height(), pixmap.take())
        .ok_or_else(|| ExportError::Raster("pixmap buffer size mismatch".to_string()))
}

/// Drop the alpha channel
pub fn to_rgb(image: &RgbaImage) -> RgbImage {
    image.convert()
}

/// Save as PNG regardless of the path's extension
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_rasterize_uses_document_size() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="30" viewBox="0 0 40 30">
            <rect x="10" y="10" width="20" height="10" fill="black"/></svg>"#;
        let image = rasterize_svg(svg).unwrap();

        assert_eq!(image.width(), 40);
        assert_eq!(image.height(), 30);
        assert_eq!(image.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(image.get_pixel(20, 15), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn test_invalid_svg_is_an_error() {
        assert!(matches!(rasterize_svg("<not-svg"), Err(ExportError::Svg(_))));
    }

    #[test]
    fn test_to_rgb() {
        let mut rgba = RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        rgba.put_pixel(1, 0, Rgba([255, 255, 255, 0]));

        let rgb = to_rgb(&rgba);
        assert_eq!(rgb.get_pixel(0, 0).0, [10, 20, 30]);
        assert_eq!(rgb.get_pixel(1, 0).0, [255, 255, 255]);
    }
}
