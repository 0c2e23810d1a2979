// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-plan generation: plot + typology table -> walls, labels, drawing

use crate::drawing::Drawing;
use crate::error::{Error, Result};
use crate::labels::{place_label, RoomLabel};
use crate::partition::{LayoutGrid, SplitPolicy};
use crate::plot::{Plot, ProductiveSpace};
use crate::types::Segment;
use crate::typology::Typology;
use serde::{Deserialize, Serialize};

/// Parameters of one generated plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRequest {
    /// Plot frontage in metres
    pub frontage: f64,
    /// Plot depth in metres
    pub depth: f64,
    pub typology: Typology,
    pub bedrooms: u32,
    #[serde(default)]
    pub productive_space: bool,
}

impl PlanRequest {
    /// `plano_{typology}_{frontage}x{depth}_{bedrooms}_{prod|no-prod}`
    ///
    /// Dimensions are truncated to whole metres.
    pub fn file_stem(&self) -> String {
        format!(
            "plano_{}_{}x{}_{}_{}",
            self.typology.slug(),
            self.frontage.trunc() as i64,
            self.depth.trunc() as i64,
            self.bedrooms,
            if self.productive_space { "prod" } else { "no-prod" }
        )
    }
}

/// Result of laying out a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    pub request: PlanRequest,
    pub plot: Plot,
    pub grid: LayoutGrid,
    pub interior_walls: Vec<Segment>,
    pub labels: Vec<RoomLabel>,
    pub productive_space: Option<ProductiveSpace>,
    /// Bedroom labels actually placed
    pub bedrooms_placed: u32,
}

impl FloorPlan {
    /// Bedrooms requested but without a slot in the typology table
    pub fn bedrooms_missing(&self) -> u32 {
        self.request.bedrooms.saturating_sub(self.bedrooms_placed)
    }

    /// Drawing in host order: perimeter, interior walls, labels, productive space
    pub fn to_drawing(&self) -> Drawing {
        let mut drawing = Drawing::new(self.request.file_stem());

        let outline = self.plot.outline();
        drawing.rectangle(outline.origin, outline.width, outline.height);
        let interior = self.plot.interior();
        drawing.rectangle(interior.origin, interior.width, interior.height);

        for wall in &self.interior_walls {
            drawing.line(wall.start, wall.end);
        }
        for label in &self.labels {
            drawing.text(vec![label.name.clone()], label.anchor);
        }
        if let Some(space) = &self.productive_space {
            drawing.wire(space.boundary(), true);
        }
        drawing
    }
}

/// Lay out `request` with the typology's table.
///
/// Split sequences that do not add up to the plot are handled per `policy`.
pub fn generate_layout(request: &PlanRequest, policy: SplitPolicy) -> Result<FloorPlan> {
    if request.bedrooms == 0 {
        return Err(Error::InvalidBedroomCount(request.bedrooms));
    }
    let plot = Plot::from_meters(request.frontage, request.depth)?;
    let table = request.typology.require_table()?;

    let grid = LayoutGrid::new(
        plot.frontage_mm,
        plot.depth_mm,
        table.splits_x,
        table.splits_y,
        policy,
    )?;
    let interior_walls = grid.interior_walls();

    let slots = table
        .bedroom_slots
        .iter()
        .take(request.bedrooms as usize);
    let labels = slots
        .chain(table.rooms)
        .map(|spec| place_label(&grid, spec))
        .collect::<Result<Vec<_>>>()?;
    let bedrooms_placed = request.bedrooms.min(table.bedroom_slots.len() as u32);

    let plan = FloorPlan {
        request: request.clone(),
        plot,
        interior_walls,
        labels,
        productive_space: request.productive_space.then(|| plot.productive_space()),
        bedrooms_placed,
        grid,
    };

    if plan.bedrooms_missing() > 0 {
        tracing::warn!(
            typology = %request.typology,
            requested = request.bedrooms,
            placed = plan.bedrooms_placed,
            "Typology has fewer bedroom cells than requested"
        );
    }
    tracing::debug!(
        stem = %request.file_stem(),
        walls = plan.interior_walls.len(),
        labels = plan.labels.len(),
        "Laid out floor plan"
    );

    Ok(plan)
}
