//! Validated marker records.

use crate::color::Color;

/// A validated marker, pinned to its 10km cell.
///
/// Records are immutable once created and are collected in input order;
/// duplicates are kept, and later ones paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRecord {
    /// 10km cell row, 0 at the southern edge of the grid.
    pub row: u32,
    /// 10km cell column, 0 at the western edge of the grid.
    pub col: u32,
    pub color: Color,
    /// The normalized grid reference, used as the shape identifier in output.
    pub label: String,
}
