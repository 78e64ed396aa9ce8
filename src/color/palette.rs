use crate::foundation::core::Rgb8;
use crate::foundation::error::{BackdropError, BackdropResult};

/// Entries per palette row; each polygon's slot indexes into a row.
pub const PALETTE_COLUMNS: usize = 4;

/// One palette row per page section.
pub type PaletteRow = [Rgb8; PALETTE_COLUMNS];

/// Immutable section palette.
///
/// Row index is the page section; column index is a polygon's color slot. Lookups by section
/// wrap around the row count so section `n` always has a "next" row.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<PaletteRow>", into = "Vec<PaletteRow>")]
pub struct Palette {
    rows: Vec<PaletteRow>,
}

impl Palette {
    /// Build a palette; at least one row is required.
    pub fn new(rows: Vec<PaletteRow>) -> BackdropResult<Self> {
        if rows.is_empty() {
            return Err(BackdropError::validation(
                "palette must contain at least one row",
            ));
        }
        Ok(Self { rows })
    }

    /// Number of rows (sections before wrapping).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of entries per row.
    pub fn columns(&self) -> usize {
        PALETTE_COLUMNS
    }

    /// Row for `section`, wrapping.
    pub fn row(&self, section: usize) -> &PaletteRow {
        &self.rows[section % self.rows.len()]
    }

    /// Color at (`section` wrapped, `slot`); an out-of-range slot yields black.
    pub fn color(&self, section: usize, slot: usize) -> Rgb8 {
        match self.row(section).get(slot) {
            Some(&c) => c,
            None => {
                tracing::warn!(slot, "palette slot out of range, using black");
                Rgb8::BLACK
            }
        }
    }

    /// All rows in section order.
    pub fn rows(&self) -> &[PaletteRow] {
        &self.rows
    }
}

impl Default for Palette {
    fn default() -> Self {
        const fn c(r: u8, g: u8, b: u8) -> Rgb8 {
            Rgb8::new(r, g, b)
        }
        Self {
            rows: vec![
                [c(0xE6, 0x27, 0x27), c(0xF3, 0xF2, 0xEC), c(0xDC, 0xDC, 0xDC), c(0x1E, 0x93, 0xAB)],
                [c(0xE6, 0x27, 0x27), c(0xF3, 0xF2, 0xEC), c(0xDC, 0xDC, 0xDC), c(0x1E, 0x93, 0xAB)],
                [c(0xFF, 0x90, 0xBB), c(0xFF, 0xC1, 0xDA), c(0xF8, 0xF8, 0xE1), c(0x8A, 0xCC, 0xD5)],
                [c(0x9E, 0xCA, 0xD6), c(0x74, 0x8D, 0xAE), c(0xF5, 0xCB, 0xCB), c(0xFF, 0xEA, 0xEA)],
            ],
        }
    }
}

impl TryFrom<Vec<PaletteRow>> for Palette {
    type Error = BackdropError;

    fn try_from(rows: Vec<PaletteRow>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Palette> for Vec<PaletteRow> {
    fn from(p: Palette) -> Self {
        p.rows
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
