// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-plan typologies and their declarative layout tables.
//!
//! A typology is data: two split sequences in millimetres plus the cells
//! that receive room labels. Adding a typology means adding a table, not
//! new placement code.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bedroom label text
pub const BEDROOM: &str = "DORMITORIO";

/// Named floor-plan archetype
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Typology {
    Compacta,
    EnL,
    EnU,
    Lineal,
}

impl Typology {
    pub const ALL: [Typology; 4] = [
        Typology::Compacta,
        Typology::EnL,
        Typology::EnU,
        Typology::Lineal,
    ];

    /// Name used in labels and output file names
    pub fn name(&self) -> &'static str {
        match self {
            Typology::Compacta => "Compacta",
            Typology::EnL => "En L",
            Typology::EnU => "En U",
            Typology::Lineal => "Lineal (I)",
        }
    }

    /// Name with whitespace and punctuation stripped, safe for file names
    pub fn slug(&self) -> &'static str {
        match self {
            Typology::Compacta => "Compacta",
            Typology::EnL => "L",
            Typology::EnU => "U",
            Typology::Lineal => "I",
        }
    }

    /// Layout table, if this typology has been drawn up
    pub fn table(&self) -> Option<&'static TypologyTable> {
        match self {
            Typology::Compacta => Some(&COMPACTA),
            // L, U and linear plans have no reference sketch yet
            Typology::EnL | Typology::EnU | Typology::Lineal => None,
        }
    }

    /// Like [`Typology::table`] but reporting missing tables as an error
    pub fn require_table(&self) -> Result<&'static TypologyTable> {
        self.table()
            .ok_or_else(|| Error::UnsupportedTypology(self.name().to_string()))
    }
}

impl fmt::Display for Typology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Typology {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "compacta" => Ok(Typology::Compacta),
            "en l" | "l" => Ok(Typology::EnL),
            "en u" | "u" => Ok(Typology::EnU),
            "lineal (i)" | "lineal" | "i" => Ok(Typology::Lineal),
            _ => Err(Error::UnknownTypology(s.to_string())),
        }
    }
}

/// Inclusive interval range on one grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub first: usize,
    pub last: usize,
}

impl Span {
    pub const fn one(index: usize) -> Self {
        Self {
            first: index,
            last: index,
        }
    }

    pub const fn range(first: usize, last: usize) -> Self {
        Self { first, last }
    }
}

/// A labeled cell in a layout table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomSpec {
    pub name: &'static str,
    pub x: Span,
    pub y: Span,
}

/// Split sequences and labeled cells of one typology
#[derive(Debug, Clone, Copy)]
pub struct TypologyTable {
    /// Reference frontage split (mm)
    pub splits_x: &'static [f64],
    /// Reference depth split (mm)
    pub splits_y: &'static [f64],
    /// Rooms always labeled
    pub rooms: &'static [RoomSpec],
    /// Bedroom cells, filled in order up to the requested count
    pub bedroom_slots: &'static [RoomSpec],
}

impl TypologyTable {
    pub fn reference_width(&self) -> f64 {
        self.splits_x.iter().sum()
    }

    pub fn reference_depth(&self) -> f64 {
        self.splits_y.iter().sum()
    }
}

/// Compacta: 0.4 wall | 3.0 bedroom | 0.4 wall | 2.0 living-dining | 0.4 wall | 1.5 hall
/// across, 0.4 wall | 1.6 bedroom | 0.8 corridor | 1.6 bedroom | 0.4 wall deep.
static COMPACTA: TypologyTable = TypologyTable {
    splits_x: &[400.0, 3000.0, 400.0, 2000.0, 400.0, 1500.0],
    splits_y: &[400.0, 1600.0, 800.0, 1600.0, 400.0],
    rooms: &[
        RoomSpec {
            name: "SALA - COMEDOR",
            x: Span::one(3),
            y: Span::one(1),
        },
        RoomSpec {
            name: "TAPON",
            x: Span::one(4),
            y: Span::one(2),
        },
    ],
    bedroom_slots: &[
        RoomSpec {
            name: BEDROOM,
            x: Span::one(1),
            y: Span::one(3),
        },
        RoomSpec {
            name: BEDROOM,
            x: Span::one(3),
            y: Span::one(3),
        },
        RoomSpec {
            name: BEDROOM,
            x: Span::one(1),
            y: Span::one(1),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_typology_names() {
        assert_eq!("Compacta".parse::<Typology>().unwrap(), Typology::Compacta);
        assert_eq!(" compacta ".parse::<Typology>().unwrap(), Typology::Compacta);
        assert_eq!("En L".parse::<Typology>().unwrap(), Typology::EnL);
        assert_eq!("U".parse::<Typology>().unwrap(), Typology::EnU);
        assert_eq!("Lineal (I)".parse::<Typology>().unwrap(), Typology::Lineal);
        assert!(matches!(
            "Circular".parse::<Typology>(),
            Err(Error::UnknownTypology(_))
        ));
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for t in Typology::ALL {
            assert_eq!(t.name().parse::<Typology>().unwrap(), t);
        }
    }

    #[test]
    fn test_compacta_reference_size() {
        let table = Typology::Compacta.require_table().unwrap();
        assert_relative_eq!(table.reference_width(), 7700.0);
        assert_relative_eq!(table.reference_depth(), 4800.0);
    }

    #[test]
    fn test_tables_reference_valid_cells() {
        for t in Typology::ALL {
            let Some(table) = t.table() else { continue };
            for room in table.rooms.iter().chain(table.bedroom_slots) {
                assert!(room.x.last < table.splits_x.len(), "{} x out of range", room.name);
                assert!(room.y.last < table.splits_y.len(), "{} y out of range", room.name);
            }
        }
    }

    #[test]
    fn test_undrawn_typologies_are_unsupported() {
        for t in [Typology::EnL, Typology::EnU, Typology::Lineal] {
            assert!(matches!(t.require_table(), Err(Error::UnsupportedTypology(_))));
        }
    }
}
