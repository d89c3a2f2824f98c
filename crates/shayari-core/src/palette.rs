//! Background palettes.
//!
//! Every card names one of six background gradients. The table is fixed and
//! read-only for the lifetime of the process; [`PaletteStore::lookup`] maps any
//! identifier to a [`Palette`], falling back to the first entry so that a
//! legacy or corrupted identifier never blocks rendering.

use std::{fmt, str::FromStr};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Identifier of one of the built-in background gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteId {
    #[default]
    Gradient1,
    Gradient2,
    Gradient3,
    Gradient4,
    Gradient5,
    Gradient6,
}

impl PaletteId {
    /// All palette identifiers in table order.
    pub const ALL: [PaletteId; 6] = [
        Self::Gradient1,
        Self::Gradient2,
        Self::Gradient3,
        Self::Gradient4,
        Self::Gradient5,
        Self::Gradient6,
    ];

    /// Returns the canonical string key of this palette.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gradient1 => "gradient1",
            Self::Gradient2 => "gradient2",
            Self::Gradient3 => "gradient3",
            Self::Gradient4 => "gradient4",
            Self::Gradient5 => "gradient5",
            Self::Gradient6 => "gradient6",
        }
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| {
                format!("unknown background `{s}`, valid values: gradient1 to gradient6")
            })
    }
}

/// A named three-stop background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    id: PaletteId,
    stops: [[u8; 3]; 3],
    preview: &'static str,
}

impl Palette {
    pub fn id(&self) -> PaletteId {
        self.id
    }

    /// Returns the gradient stops, applied at offsets 0, 0.5 and 1.0.
    pub fn gradient_stops(&self) -> [Color; 3] {
        self.stops.map(|[r, g, b]| Color::from_rgb8(r, g, b))
    }

    /// Human readable description of the gradient, for pickers and listings.
    pub fn preview(&self) -> &'static str {
        self.preview
    }
}

static PALETTES: [Palette; 6] = [
    Palette {
        id: PaletteId::Gradient1,
        stops: [[0x93, 0x33, 0xea], [0xdb, 0x27, 0x77], [0xdc, 0x26, 0x26]],
        preview: "purple · pink · red",
    },
    Palette {
        id: PaletteId::Gradient2,
        stops: [[0x25, 0x63, 0xeb], [0x08, 0x91, 0xb2], [0x0d, 0x94, 0x88]],
        preview: "blue · cyan · teal",
    },
    Palette {
        id: PaletteId::Gradient3,
        stops: [[0xea, 0x58, 0x0c], [0xdc, 0x26, 0x26], [0xdb, 0x27, 0x77]],
        preview: "orange · red · pink",
    },
    Palette {
        id: PaletteId::Gradient4,
        stops: [[0x16, 0xa3, 0x4a], [0x05, 0x96, 0x69], [0x08, 0x91, 0xb2]],
        preview: "green · emerald · cyan",
    },
    Palette {
        id: PaletteId::Gradient5,
        stops: [[0x4f, 0x46, 0xe5], [0x93, 0x33, 0xea], [0xdb, 0x27, 0x77]],
        preview: "indigo · purple · pink",
    },
    Palette {
        id: PaletteId::Gradient6,
        stops: [[0xca, 0x8a, 0x04], [0xea, 0x58, 0x0c], [0xdc, 0x26, 0x26]],
        preview: "yellow · orange · red",
    },
];

/// Read-only access to the built-in palette table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteStore;

impl PaletteStore {
    /// Resolves a background identifier to its palette.
    ///
    /// Unknown or empty identifiers resolve to the first palette.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shayari_core::palette::{PaletteId, PaletteStore};
    /// assert_eq!(PaletteStore::lookup("gradient3").id(), PaletteId::Gradient3);
    /// assert_eq!(PaletteStore::lookup("unknown-id").id(), PaletteId::Gradient1);
    /// ```
    pub fn lookup(id: &str) -> &'static Palette {
        match id.parse::<PaletteId>() {
            Ok(palette_id) => Self::get(palette_id),
            Err(_) => {
                warn!(background = id; "Unknown background, falling back to first palette");
                &PALETTES[0]
            }
        }
    }

    /// Returns the palette for a known identifier.
    pub fn get(id: PaletteId) -> &'static Palette {
        // PALETTES is declared in PaletteId::ALL order
        &PALETTES[id as usize]
    }

    /// Returns the whole table in declaration order.
    pub fn all() -> &'static [Palette] {
        &PALETTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_id_order() {
        for (index, id) in PaletteId::ALL.into_iter().enumerate() {
            assert_eq!(PaletteStore::all()[index].id(), id);
            assert_eq!(PaletteStore::get(id).id(), id);
        }
    }

    #[test]
    fn test_lookup_known_ids() {
        let palette = PaletteStore::lookup("gradient2");
        assert_eq!(palette.id(), PaletteId::Gradient2);
        let [first, middle, last] = palette.gradient_stops();
        assert_eq!(first.to_string(), "#2563eb");
        assert_eq!(middle.to_string(), "#0891b2");
        assert_eq!(last.to_string(), "#0d9488");
    }

    #[test]
    fn test_lookup_falls_back_to_first_palette() {
        for id in ["unknown-id", "", "Gradient1", "gradient7", " gradient2"] {
            assert_eq!(PaletteStore::lookup(id).id(), PaletteId::Gradient1, "{id:?}");
        }
    }

    #[test]
    fn test_palette_id_round_trip() {
        for id in PaletteId::ALL {
            assert_eq!(id.to_string().parse::<PaletteId>(), Ok(id));
        }
        assert!("gradient0".parse::<PaletteId>().is_err());
    }

    #[test]
    fn test_every_palette_has_preview() {
        assert!(PaletteStore::all().iter().all(|p| !p.preview().is_empty()));
    }
}
