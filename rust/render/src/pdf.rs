// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-page PDF wrapping a raster image.
//!
//! The page is the size of the image in points (72 dpi) and holds one
//! FlateDecode RGB image XObject scaled to cover it.

use crate::error::Result;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::RgbImage;
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref};
use std::io::Write;

const IMAGE_NAME: Name<'static> = Name(b"Im0");

/// Serialize `image` as a one-page PDF document
pub fn image_to_pdf(image: &RgbImage) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let (w, h) = (width as f32, height as f32);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(image.as_raw())?;
    let pixels = encoder.finish()?;

    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let page_id = Ref::new(3);
    let image_id = Ref::new(4);
    let content_id = Ref::new(5);

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id).kids([page_id]).count(1);

    let mut page = pdf.page(page_id);
    page.media_box(Rect::new(0.0, 0.0, w, h));
    page.parent(page_tree_id);
    page.contents(content_id);
    page.resources().x_objects().pair(IMAGE_NAME, image_id);
    page.finish();

    let mut xobject = pdf.image_xobject(image_id, &pixels);
    xobject.filter(Filter::FlateDecode);
    xobject.width(width as i32);
    xobject.height(height as i32);
    xobject.color_space().device_rgb();
    xobject.bits_per_component(8);
    xobject.finish();

    // Scale the unit image square to cover the page
    let mut content = Content::new();
    content.save_state();
    content.transform([w, 0.0, 0.0, h, 0.0, 0.0]);
    content.x_object(IMAGE_NAME);
    content.restore_state();
    pdf.stream(content_id, &content.finish());

    Ok(pdf.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack.windows(needle.len()).position(|w| w == needle)
    }

    fn sample_image() -> RgbImage {
        let mut image = RgbImage::new(4, 3);
        image.put_pixel(1, 1, image::Rgb([200, 10, 10]));
        image
    }

    #[test]
    fn test_pdf_structure() {
        let pdf = image_to_pdf(&sample_image()).unwrap();

        assert!(pdf.starts_with(b"%PDF-"));
        assert!(find(&pdf, b"%%EOF").is_some());
        assert!(find(&pdf, b"/MediaBox").is_some());
        assert!(find(&pdf, b"/Width 4").is_some());
        assert!(find(&pdf, b"/Height 3").is_some());
        assert!(find(&pdf, b"/FlateDecode").is_some());
        assert!(find(&pdf, b"/Count 1").is_some());
    }

    #[test]
    fn test_xref_offsets_point_at_objects() {
        let pdf = image_to_pdf(&sample_image()).unwrap();
        let xref = find(&pdf, b"xref\n").unwrap();
        let table = String::from_utf8_lossy(&pdf[xref..]);

        let offsets: Vec<usize> = table
            .lines()
            .skip(3)
            .take(5)
            .map(|line| line[..10].parse().unwrap())
            .collect();
        for (i, offset) in offsets.iter().enumerate() {
            let header = format!("{} 0 obj", i + 1);
            assert!(pdf[*offset..].starts_with(header.as_bytes()), "object {} misplaced", i + 1);
        }

        let startxref = find(&pdf, b"startxref\n").unwrap();
        let tail = String::from_utf8_lossy(&pdf[startxref + 10..]);
        let declared: usize = tail.lines().next().unwrap().parse().unwrap();
        assert_eq!(declared, xref);
    }

    #[test]
    fn test_image_stream_decompresses_to_pixels() {
        let image = sample_image();
        let pdf = image_to_pdf(&image).unwrap();

        let start = find(&pdf, b"stream\n").unwrap() + 7;
        let end = start + find(&pdf[start..], b"\nendstream").unwrap();
        let mut decoded = Vec::new();
        ZlibDecoder::new(&pdf[start..end])
            .read_to_end(&mut decoded)
            .unwrap();

        assert_eq!(decoded, image.as_raw().as_slice());
    }
}
