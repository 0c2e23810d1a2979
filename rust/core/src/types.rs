// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core 2D types shared by the layout and drawing modules.
//!
//! All coordinates are millimetres in plan space, origin at the front-left
//! corner of the plot, x along the frontage and y along the depth.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A 2D point (simplified for serialization)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_nalgebra(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn from_nalgebra(p: &Point2<f64>) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Straight wall or cut line between two points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start.to_nalgebra(), &self.end.to_nalgebra())
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }
}

/// Axis-aligned rectangle given by its lower-left corner and size
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub origin: Point2D,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(origin: Point2D, width: f64, height: f64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Rectangle spanning two corners (in any order)
    pub fn from_corners(a: Point2D, b: Point2D) -> Self {
        let min_x = a.x.min(b.x);
        let min_y = a.y.min(b.y);
        Self::new(
            Point2D::new(min_x, min_y),
            (a.x - b.x).abs(),
            (a.y - b.y).abs(),
        )
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.height
    }

    pub fn center(&self) -> Point2D {
        let far = Point2::new(self.max_x(), self.max_y());
        Point2D::from_nalgebra(&nalgebra::center(&self.origin.to_nalgebra(), &far))
    }

    /// Strict containment: points on the boundary are outside
    pub fn contains_strict(&self, p: Point2D) -> bool {
        p.x > self.origin.x && p.x < self.max_x() && p.y > self.origin.y && p.y < self.max_y()
    }

    /// Corners in counter-clockwise order starting at the origin
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.origin,
            Point2D::new(self.max_x(), self.origin.y),
            Point2D::new(self.max_x(), self.max_y()),
            Point2D::new(self.origin.x, self.max_y()),
        ]
    }
}

/// Axis-aligned bounding box accumulated from points
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    pub fn include(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
