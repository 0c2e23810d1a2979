// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Backend-neutral drawing document.
//!
//! A drawing is an ordered list of 2D shapes in millimetres. Renderers in
//! `planta-render` turn it into SVG, PNG and PDF output.

use crate::labels::{TEXT_HALF_HEIGHT, TEXT_HALF_WIDTH};
use crate::types::{Bounds, Point2D};
use serde::{Deserialize, Serialize};

/// Drawable entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// Outline rectangle from its lower-left corner
    Rectangle {
        origin: Point2D,
        length: f64,
        height: f64,
    },
    Line {
        start: Point2D,
        end: Point2D,
    },
    /// Polyline, optionally closed back to its first point
    Wire {
        points: Vec<Point2D>,
        closed: bool,
    },
    /// Text lines starting at `anchor` (baseline-left of the first line)
    Text {
        lines: Vec<String>,
        anchor: Point2D,
    },
}

impl Shape {
    fn extend_bounds(&self, bounds: &mut Bounds) {
        match self {
            Shape::Rectangle {
                origin,
                length,
                height,
            } => {
                bounds.include(*origin);
                bounds.include(origin.offset(*length, *height));
            }
            Shape::Line { start, end } => {
                bounds.include(*start);
                bounds.include(*end);
            }
            Shape::Wire { points, .. } => {
                for p in points {
                    bounds.include(*p);
                }
            }
            Shape::Text { anchor, .. } => {
                bounds.include(*anchor);
                bounds.include(anchor.offset(2.0 * TEXT_HALF_WIDTH, 2.0 * TEXT_HALF_HEIGHT));
            }
        }
    }
}

/// Named drawing document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Drawing {
    pub name: String,
    pub shapes: Vec<Shape>,
}

impl Drawing {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    pub fn rectangle(&mut self, origin: Point2D, length: f64, height: f64) {
        self.shapes.push(Shape::Rectangle {
            origin,
            length,
            height,
        });
    }

    pub fn line(&mut self, start: Point2D, end: Point2D) {
        self.shapes.push(Shape::Line { start, end });
    }

    pub fn wire(&mut self, points: Vec<Point2D>, closed: bool) {
        self.shapes.push(Shape::Wire { points, closed });
    }

    pub fn text(&mut self, lines: Vec<String>, anchor: Point2D) {
        self.shapes.push(Shape::Text { lines, anchor });
    }

    /// Bounding box of every shape, or `None` for an empty drawing
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds = Bounds::empty();
        for shape in &self.shapes {
            shape.extend_bounds(&mut bounds);
        }
        (!bounds.is_empty()).then_some(bounds)
    }
}
