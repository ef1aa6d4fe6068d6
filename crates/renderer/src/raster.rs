//! The raster output path: paletted canvas to indexed PNG.

use crate::canvas::Canvas;
use crate::landmask::LandMask;
use crate::layout::Layout;
use crate::png::create_png_indexed;
use crate::RenderError;
use gridmap_common::{CellRecord, Color};

/// Palette index of the white background. Its tRNS alpha is zero, so the
/// background is transparent in the emitted PNG - and a `white` record,
/// which shares the entry, disappears into it the way it would with a
/// transparent background color in an indexed bitmap.
const BACKGROUND: u8 = 0;

/// Palette index of the neutral land fill.
const LAND: u8 = 1;

/// The fixed raster palette: background, land silver, then the marker
/// colors in `Color::ALL` order (white folded into the background entry).
fn palette() -> Vec<(u8, u8, u8, u8)> {
    let mut entries = vec![(255, 255, 255, 0), (192, 192, 192, 255)];
    for color in Color::ALL {
        if color == Color::White {
            continue;
        }
        let (r, g, b) = color.to_rgb();
        entries.push((r, g, b, 255));
    }
    entries
}

/// Palette index for a marker color.
fn color_index(color: Color) -> u8 {
    match color {
        Color::White => BACKGROUND,
        Color::Red => 2,
        Color::Green => 3,
        Color::Blue => 4,
        Color::Black => 5,
        Color::Grey => 6,
    }
}

/// Draw land cells, then records in input order, and encode the result.
pub fn render_raster(
    mask: &LandMask,
    records: &[CellRecord],
    layout: &Layout,
) -> Result<Vec<u8>, RenderError> {
    let size = layout.canvas_size();
    let square = layout.square_size();
    let mut canvas = Canvas::new(size, size, BACKGROUND);

    for &(col, row) in mask.cells() {
        let (x, y) = layout.cell_origin(col, row);
        canvas.fill_rect(x, y, square, square, LAND);
    }

    for record in records {
        let (x, y) = layout.cell_origin(record.col, record.row);
        canvas.fill_rect(x, y, square, square, color_index(record.color));
    }

    create_png_indexed(
        size as usize,
        size as usize,
        &palette(),
        canvas.indices(),
    )
}
