//! Irish National Grid references: parsing, coordinate transformation, and
//! bounds validation.
//!
//! Implements the grid arithmetic from scratch without external dependencies.

pub mod bounds;
pub mod entry;
pub mod reference;
pub mod square;

pub use bounds::{CellIndex, Coordinate, OutOfBounds};
pub use entry::parse_entry;
pub use reference::{GridReference, ReferenceParseError};
pub use square::GridSquare;
