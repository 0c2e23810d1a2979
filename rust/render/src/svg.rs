// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drawing -> SVG document.
//!
//! The view is a top-down orthographic camera framed on the drawing bounds
//! ("fit all"): the viewBox covers the bounds plus a margin and the plan's
//! y axis is flipped so the back of the plot is at the top of the page.

use planta_core::{Bounds, Drawing, Point2D, Shape};
use std::fmt::Write;

/// Margin around the framed geometry, as a fraction of its larger side
const FRAME_MARGIN: f64 = 0.05;
/// Label font size in plan millimetres
const LABEL_FONT_SIZE: f64 = 250.0;
/// Stroke width as a fraction of the larger drawing side
const STROKE_RATIO: f64 = 1.0 / 400.0;
const MIN_STROKE_PX: f64 = 2.0;

/// Camera mapping plan coordinates into SVG user space
#[derive(Debug, Clone, Copy)]
struct View {
    bounds: Bounds,
    margin: f64,
}

impl View {
    fn fit(bounds: Bounds) -> Self {
        let side = bounds.width().max(bounds.height()).max(1.0);
        Self {
            bounds,
            margin: side * FRAME_MARGIN,
        }
    }

    fn x(&self, p: Point2D) -> f64 {
        p.x
    }

    /// Mirror y inside the bounds so "up" in plan is "up" on the page
    fn y(&self, p: Point2D) -> f64 {
        self.bounds.max_y + self.bounds.min_y - p.y
    }

    fn view_box(&self) -> (f64, f64, f64, f64) {
        (
            self.bounds.min_x - self.margin,
            self.bounds.min_y - self.margin,
            self.bounds.width() + 2.0 * self.margin,
            self.bounds.height() + 2.0 * self.margin,
        )
    }

    /// Stroke proportional to the drawing, but never thinner than
    /// `MIN_STROKE_PX` once rasterized at `width` x `height`
    fn stroke_width(&self, width: u32, height: u32) -> f64 {
        let (_, _, vw, vh) = self.view_box();
        let units_per_px = (vw / width.max(1) as f64).max(vh / height.max(1) as f64);
        let proportional = self.bounds.width().max(self.bounds.height()).max(1.0) * STROKE_RATIO;
        proportional.max(MIN_STROKE_PX * units_per_px)
    }
}

/// Render `drawing` as an SVG document of `width` x `height` pixels on a
/// white background
pub fn drawing_to_svg(drawing: &Drawing, width: u32, height: u32) -> String {
    let bounds = drawing.bounds().unwrap_or(Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 1.0,
        max_y: 1.0,
    });
    let view = View::fit(bounds);
    let (vx, vy, vw, vh) = view.view_box();
    let stroke = view.stroke_width(width, height);

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"{vx:.2} {vy:.2} {vw:.2} {vh:.2}\" preserveAspectRatio=\"xMidYMid meet\">",
    );
    let _ = write!(
        svg,
        "<title>{}</title><rect x=\"{vx:.2}\" y=\"{vy:.2}\" width=\"{vw:.2}\" height=\"{vh:.2}\" fill=\"white\"/>",
        escape_xml(&drawing.name)
    );
    let _ = write!(
        svg,
        "<g fill=\"none\" stroke=\"black\" stroke-width=\"{stroke:.2}\" stroke-linejoin=\"miter\">"
    );

    for shape in &drawing.shapes {
        svg.push_str(&shape_svg(shape, &view));
    }

    svg.push_str("</g></svg>");
    svg
}

fn shape_svg(shape: &Shape, view: &View) -> String {
    match shape {
        Shape::Rectangle {
            origin,
            length,
            height,
        } => {
            let top_left = origin.offset(0.0, *height);
            format!(
                "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"/>",
                view.x(top_left),
                view.y(top_left),
                length,
                height
            )
        }
        Shape::Line { start, end } => format!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>",
            view.x(*start),
            view.y(*start),
            view.x(*end),
            view.y(*end)
        ),
        Shape::Wire { points, closed } => {
            let coords = points
                .iter()
                .map(|p| format!("{:.2},{:.2}", view.x(*p), view.y(*p)))
                .collect::<Vec<_>>()
                .join(" ");
            let tag = if *closed { "polygon" } else { "polyline" };
            format!("<{tag} points=\"{coords}\"/>")
        }
        Shape::Text { lines, anchor } => {
            let x = view.x(*anchor);
            let y = view.y(*anchor);
            let mut text = format!(
                "<text x=\"{x:.2}\" y=\"{y:.2}\" font-family=\"sans-serif\" font-size=\"{LABEL_FONT_SIZE}\" fill=\"black\" stroke=\"none\">"
            );
            for (i, line) in lines.iter().enumerate() {
                let dy = if i == 0 { 0.0 } else { LABEL_FONT_SIZE * 1.2 };
                let _ = write!(text, "<tspan x=\"{x:.2}\" dy=\"{dy:.2}\">{}</tspan>", escape_xml(line));
            }
            text.push_str("</text>");
            text
        }
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Drawing {
        let mut drawing = Drawing::new("plano_test");
        drawing.rectangle(Point2D::new(0.0, 0.0), 8000.0, 10000.0);
        drawing.line(Point2D::new(400.0, 0.0), Point2D::new(400.0, 10000.0));
        drawing.wire(
            vec![
                Point2D::new(6000.0, 8000.0),
                Point2D::new(7600.0, 8000.0),
                Point2D::new(7600.0, 9600.0),
            ],
            true,
        );
        drawing.text(vec!["SALA & COMEDOR".into()], Point2D::new(4400.0, 1000.0));
        drawing
    }

    #[test]
    fn test_svg_has_requested_size_and_framing() {
        let svg = drawing_to_svg(&sample(), 1600, 1200);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("width=\"1600\" height=\"1200\""));
        // 10000 mm tall, 5% margin
        assert!(svg.contains("viewBox=\"-500.00 -500.00 9000.00 11000.00\""));
        assert!(svg.ends_with("</g></svg>"));
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let svg = drawing_to_svg(&sample(), 1600, 1200);
        // Rectangle top-left maps to the top of the bounds
        assert!(svg.contains("<rect x=\"0.00\" y=\"0.00\" width=\"8000.00\" height=\"10000.00\"/>"));
        // Label near the front of the plot ends up near the bottom
        assert!(svg.contains("<text x=\"4400.00\" y=\"9000.00\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let svg = drawing_to_svg(&sample(), 1600, 1200);
        assert!(svg.contains("SALA &amp; COMEDOR"));
        assert!(svg.contains("<polygon points="));
    }

    #[test]
    fn test_empty_drawing_still_renders() {
        let svg = drawing_to_svg(&Drawing::new("vacio"), 100, 100);
        assert!(svg.contains("<title>vacio</title>"));
    }
}
