//! Common types shared across the gridmap crates.

pub mod color;
pub mod error;
pub mod record;

pub use color::Color;
pub use error::{Direction, GridMapError, GridMapResult};
pub use record::CellRecord;
