// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room label placement at cell centroids

use crate::error::Result;
use crate::partition::LayoutGrid;
use crate::types::{Point2D, Rect};
use crate::typology::RoomSpec;
use serde::{Deserialize, Serialize};

/// Half width of the assumed text bounding box (mm)
pub const TEXT_HALF_WIDTH: f64 = 400.0;
/// Half height of the assumed text bounding box (mm)
pub const TEXT_HALF_HEIGHT: f64 = 200.0;

/// Room name placed on the plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomLabel {
    pub name: String,
    /// Cell (or cell span) the label belongs to
    pub cell: Rect,
    /// Centroid of `cell`
    pub center: Point2D,
    /// Text origin: centroid shifted by the half text box so the text
    /// reads centered instead of starting at the centroid
    pub anchor: Point2D,
}

/// Place `spec` at the centroid of its cell span in `grid`
pub fn place_label(grid: &LayoutGrid, spec: &RoomSpec) -> Result<RoomLabel> {
    let cell = grid.span(spec.x.first..=spec.x.last, spec.y.first..=spec.y.last)?;
    let center = cell.center();

    Ok(RoomLabel {
        name: spec.name.to_string(),
        cell,
        center,
        anchor: center.offset(-TEXT_HALF_WIDTH, -TEXT_HALF_HEIGHT),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::SplitPolicy;
    use crate::typology::Span;
    use approx::assert_relative_eq;

    #[test]
    fn test_label_at_cell_centroid() {
        let grid = LayoutGrid::new(
            7700.0,
            4800.0,
            &[400.0, 3000.0, 400.0, 2000.0, 400.0, 1500.0],
            &[400.0, 1600.0, 800.0, 1600.0, 400.0],
            SplitPolicy::Strict,
        )
        .unwrap();
        let spec = RoomSpec {
            name: "SALA - COMEDOR",
            x: Span::one(3),
            y: Span::one(1),
        };

        let label = place_label(&grid, &spec).unwrap();
        assert_relative_eq!(label.center.x, 4800.0);
        assert_relative_eq!(label.center.y, 1200.0);
        assert_relative_eq!(label.anchor.x, 4400.0);
        assert_relative_eq!(label.anchor.y, 1000.0);
    }

    #[test]
    fn test_label_out_of_grid_is_an_error() {
        let grid = LayoutGrid::new(10.0, 10.0, &[10.0], &[10.0], SplitPolicy::Strict).unwrap();
        let spec = RoomSpec {
            name: "X",
            x: Span::one(1),
            y: Span::one(0),
        };
        assert!(place_label(&grid, &spec).is_err());
    }
}
