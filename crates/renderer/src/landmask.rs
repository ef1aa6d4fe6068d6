//! The fixed 10km-cell mask for the Ireland landmass outline.

use thiserror::Error;

/// Embedded land-cell list, one `col,row` pair per line.
const IRELAND_CELLS: &str = include_str!("../assets/ireland-10km.csv");

/// An immutable set of 10km cells forming the landmass outline.
///
/// Loaded once at startup and never mutated; the renderer draws every cell
/// in it before any records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandMask {
    cells: Vec<(u32, u32)>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaskParseError {
    #[error("mask line {0} is not a 'col,row' pair: {1:?}")]
    InvalidLine(usize, String),

    #[error("mask line {0} has an invalid number: {1:?}")]
    InvalidNumber(usize, String),
}

impl LandMask {
    /// The built-in Ireland outline.
    pub fn ireland() -> Self {
        Self::parse(IRELAND_CELLS).expect("embedded land mask is well formed")
    }

    /// Parse a mask description: one `col,row` pair per line, blank lines
    /// ignored.
    pub fn parse(text: &str) -> Result<Self, MaskParseError> {
        let mut cells = Vec::new();

        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (col, row) = line
                .split_once(',')
                .ok_or_else(|| MaskParseError::InvalidLine(number + 1, line.to_string()))?;
            let col = col
                .trim()
                .parse()
                .map_err(|_| MaskParseError::InvalidNumber(number + 1, col.to_string()))?;
            let row = row
                .trim()
                .parse()
                .map_err(|_| MaskParseError::InvalidNumber(number + 1, row.to_string()))?;
            cells.push((col, row));
        }

        Ok(Self { cells })
    }

    /// Create a mask from an explicit cell list (mostly for tests).
    pub fn from_cells(cells: Vec<(u32, u32)>) -> Self {
        Self { cells }
    }

    /// The land cells, in asset order.
    pub fn cells(&self) -> &[(u32, u32)] {
        &self.cells
    }
}
