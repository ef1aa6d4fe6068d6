//! Legal extent of the Irish Grid and 10km cell indexing.

use gridmap_common::Direction;
use thiserror::Error;

/// Easting extent of the grid in meters (exclusive upper bound).
pub const EASTING_EXTENT: i64 = 400_000;

/// Northing extent of the grid in meters (exclusive upper bound).
pub const NORTHING_EXTENT: i64 = 500_000;

/// Side of one rendered cell in meters.
pub const CELL_SIZE: i64 = 10_000;

/// A planar Irish Grid coordinate in meters.
///
/// Stored signed so the west/south bound checks stay expressible even though
/// the current reference arithmetic can only produce non-negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub easting: i64,
    pub northing: i64,
}

/// A 10km cell index: column 0..=39 west to east, row 0..=49 south to north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub col: u32,
    pub row: u32,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("coordinate lies {direction} of the grid")]
pub struct OutOfBounds {
    pub direction: Direction,
}

impl Coordinate {
    pub fn new(easting: i64, northing: i64) -> Self {
        Self { easting, northing }
    }

    /// Check the coordinate against the grid extent and reduce it to its
    /// 10km cell.
    ///
    /// The checks run in a fixed order (west, east, south, north) and the
    /// first failure wins, so an easting violation is reported even when the
    /// northing is also out of range.
    pub fn validate(&self) -> Result<CellIndex, OutOfBounds> {
        if self.easting < 0 {
            return Err(OutOfBounds {
                direction: Direction::West,
            });
        }
        if self.easting >= EASTING_EXTENT {
            return Err(OutOfBounds {
                direction: Direction::East,
            });
        }
        if self.northing < 0 {
            return Err(OutOfBounds {
                direction: Direction::South,
            });
        }
        if self.northing >= NORTHING_EXTENT {
            return Err(OutOfBounds {
                direction: Direction::North,
            });
        }

        Ok(CellIndex {
            col: (self.easting / CELL_SIZE) as u32,
            row: (self.northing / CELL_SIZE) as u32,
        })
    }
}
