// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plot dimensions, perimeter walls and the productive-space module

use crate::error::{Error, Result};
use crate::types::{Point2D, Rect};
use serde::{Deserialize, Serialize};

/// Wall thickness (mm)
pub const WALL_THICKNESS_MM: f64 = 400.0;
/// Smallest interior span a room can have (mm)
pub const MIN_ROOM_SPAN_MM: f64 = 1000.0;
/// Productive-space side as a fraction of the shorter plot dimension
pub const PRODUCTIVE_SPACE_RATIO: f64 = 0.2;

/// Rectangular plot with its origin at (0, 0), in millimetres
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Plot {
    pub frontage_mm: f64,
    pub depth_mm: f64,
}

impl Plot {
    /// Build a plot from metres, rejecting sizes whose interior would
    /// collapse once the perimeter walls are drawn
    pub fn from_meters(frontage: f64, depth: f64) -> Result<Self> {
        for (name, value) in [("frontage", frontage), ("depth", depth)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidDimension { name, value });
            }
        }

        let plot = Self {
            frontage_mm: frontage * 1000.0,
            depth_mm: depth * 1000.0,
        };
        let min_mm = Self::min_dimension_mm();
        for (name, value_mm) in [("frontage", plot.frontage_mm), ("depth", plot.depth_mm)] {
            if value_mm <= min_mm {
                return Err(Error::PlotTooSmall {
                    name,
                    value_mm,
                    min_mm,
                });
            }
        }
        Ok(plot)
    }

    /// Both dimensions must be strictly greater than this
    pub fn min_dimension_mm() -> f64 {
        2.0 * WALL_THICKNESS_MM + MIN_ROOM_SPAN_MM
    }

    pub fn outline(&self) -> Rect {
        Rect::new(Point2D::new(0.0, 0.0), self.frontage_mm, self.depth_mm)
    }

    /// Inner face of the perimeter walls
    pub fn interior(&self) -> Rect {
        Rect::new(
            Point2D::new(WALL_THICKNESS_MM, WALL_THICKNESS_MM),
            self.frontage_mm - 2.0 * WALL_THICKNESS_MM,
            self.depth_mm - 2.0 * WALL_THICKNESS_MM,
        )
    }

    /// Square productive space in the far corner, inset by the wall thickness.
    ///
    /// It may overlap labeled rooms for some proportions.
    pub fn productive_space(&self) -> ProductiveSpace {
        let side = PRODUCTIVE_SPACE_RATIO * self.frontage_mm.min(self.depth_mm);
        let origin = Point2D::new(
            self.frontage_mm - side - WALL_THICKNESS_MM,
            self.depth_mm - side - WALL_THICKNESS_MM,
        );
        ProductiveSpace {
            side,
            area: Rect::new(origin, side, side),
        }
    }
}

/// Bodega + garden + pens module
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProductiveSpace {
    pub side: f64,
    pub area: Rect,
}

impl ProductiveSpace {
    /// Closed boundary, counter-clockwise from the origin corner
    pub fn boundary(&self) -> Vec<Point2D> {
        self.area.corners().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_plot_from_meters() {
        let plot = Plot::from_meters(8.0, 10.0).unwrap();
        assert_relative_eq!(plot.frontage_mm, 8000.0);
        assert_relative_eq!(plot.depth_mm, 10000.0);

        let interior = plot.interior();
        assert_relative_eq!(interior.origin.x, 400.0);
        assert_relative_eq!(interior.width, 7200.0);
        assert_relative_eq!(interior.height, 9200.0);
    }

    #[test]
    fn test_plot_rejects_invalid_dimensions() {
        assert!(matches!(
            Plot::from_meters(0.0, 10.0),
            Err(Error::InvalidDimension { name: "frontage", .. })
        ));
        assert!(matches!(
            Plot::from_meters(8.0, f64::NAN),
            Err(Error::InvalidDimension { name: "depth", .. })
        ));
        assert!(matches!(
            Plot::from_meters(1.5, 10.0),
            Err(Error::PlotTooSmall { name: "frontage", .. })
        ));
        assert!(Plot::from_meters(1.81, 1.81).is_ok());
    }

    #[test]
    fn test_productive_space_size_and_position() {
        for (f, p) in [(8.0, 10.0), (7.7, 4.8), (20.0, 3.0)] {
            let plot = Plot::from_meters(f, p).unwrap();
            let space = plot.productive_space();
            let side = 0.2 * plot.frontage_mm.min(plot.depth_mm);

            assert_relative_eq!(space.side, side);
            assert_relative_eq!(space.area.origin.x, plot.frontage_mm - side - WALL_THICKNESS_MM);
            assert_relative_eq!(space.area.origin.y, plot.depth_mm - side - WALL_THICKNESS_MM);
            assert_relative_eq!(space.area.max_x(), plot.frontage_mm - WALL_THICKNESS_MM);
        }
    }

    #[test]
    fn test_productive_space_boundary_is_square() {
        let space = Plot::from_meters(8.0, 10.0).unwrap().productive_space();
        let boundary = space.boundary();
        assert_eq!(boundary.len(), 4);
        assert_relative_eq!(boundary[2].x - boundary[0].x, 1600.0);
        assert_relative_eq!(boundary[2].y - boundary[0].y, 1600.0);
    }
}
