//! Map image rendering: colored 10km-cell markers over the Ireland outline.
//!
//! Two output paths share one cell-to-pixel layout:
//! - raster: a paletted canvas encoded as an indexed PNG
//! - vector: an SVG document assembled directly
//!
//! Both draw the land mask first and then the records in input order, so
//! later records paint over earlier ones.

pub mod canvas;
pub mod landmask;
pub mod layout;
pub mod png;
pub mod raster;
pub mod svg;

pub use landmask::LandMask;
pub use layout::Layout;

use gridmap_common::{CellRecord, GridMapError};
use thiserror::Error;
use tracing::debug;

/// Output encodings for the finished map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indexed PNG.
    Raster,
    /// SVG document.
    Vector,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("image compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

impl From<RenderError> for GridMapError {
    fn from(err: RenderError) -> Self {
        GridMapError::Render(err.to_string())
    }
}

/// Render the full map as image bytes.
///
/// An empty record list still yields the complete land-mask image.
pub fn render(
    mask: &LandMask,
    records: &[CellRecord],
    layout: &Layout,
    format: OutputFormat,
) -> Result<Vec<u8>, RenderError> {
    debug!(
        land_cells = mask.cells().len(),
        records = records.len(),
        canvas = layout.canvas_size(),
        "rendering map"
    );

    match format {
        OutputFormat::Raster => raster::render_raster(mask, records, layout),
        OutputFormat::Vector => Ok(svg::render_svg(mask, records, layout).into_bytes()),
    }
}
