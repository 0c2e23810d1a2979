// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Planta Core
//!
//! Parametric floor-plan layout for small Andean housing units.
//!
//! A plan is built from a plot (frontage x depth), a typology and a few
//! options:
//!
//! 1. The perimeter is drawn as an outer and an inner rectangle, one wall
//!    thickness apart
//! 2. The typology's split sequences are fitted to the plot and turned into
//!    full-span interior walls
//! 3. Room names are placed at the centroids of the cells listed in the
//!    typology table
//! 4. An optional productive-space square is added in the far corner
//!
//! ## Quick Start
//!
//! ```rust
//! use planta_core::{generate_layout, PlanRequest, SplitPolicy, Typology};
//!
//! let request = PlanRequest {
//!     frontage: 8.0,
//!     depth: 10.0,
//!     typology: Typology::Compacta,
//!     bedrooms: 2,
//!     productive_space: true,
//! };
//! let plan = generate_layout(&request, SplitPolicy::Rescale).unwrap();
//! assert_eq!(plan.interior_walls.len(), 9);
//!
//! let drawing = plan.to_drawing();
//! assert_eq!(drawing.name, "plano_Compacta_8x10_2_prod");
//! ```

pub mod drawing;
pub mod error;
pub mod labels;
pub mod layout;
pub mod partition;
pub mod plot;
pub mod types;
pub mod typology;

pub use drawing::{Drawing, Shape};
pub use error::{Error, Result};
pub use labels::{place_label, RoomLabel, TEXT_HALF_HEIGHT, TEXT_HALF_WIDTH};
pub use layout::{generate_layout, FloorPlan, PlanRequest};
pub use partition::{partition, prefix_sums, rescale_splits, LayoutGrid, SplitPolicy};
pub use plot::{Plot, ProductiveSpace, MIN_ROOM_SPAN_MM, WALL_THICKNESS_MM};
pub use types::{Bounds, Point2D, Rect, Segment};
pub use typology::{RoomSpec, Span, Typology, TypologyTable};
