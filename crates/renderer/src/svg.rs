//! The vector output path: an SVG document assembled by string building.

use crate::landmask::LandMask;
use crate::layout::Layout;
use gridmap_common::CellRecord;

/// Fill and stroke for land cells.
const LAND_FILL: &str = "silver";

/// Build the SVG document: land rects first, then record rects in input
/// order so later records sit on top.
///
/// Record labels become element ids. Validated references contain only
/// `A-Z0-9`, and generated land ids only `X`/`Y` and digits, so no XML
/// escaping is needed.
pub fn render_svg(mask: &LandMask, records: &[CellRecord], layout: &Layout) -> String {
    let size = layout.canvas_size();
    let square = layout.square_size();

    let mut svg = String::with_capacity(64 * (mask.cells().len() + records.len()) + 256);
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        size, size, size, size
    ));

    for &(col, row) in mask.cells() {
        let (x, y) = layout.cell_origin(col, row);
        svg.push_str(&format!(
            "  <rect id=\"X{}Y{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"{}\"/>\n",
            col, row, x, y, square, square, LAND_FILL, LAND_FILL
        ));
    }

    for record in records {
        let (x, y) = layout.cell_origin(record.col, record.row);
        let (r, g, b) = record.color.to_rgb();
        svg.push_str(&format!(
            "  <rect id=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"rgb({},{},{})\"/>\n",
            record.label, x, y, square, square, r, g, b
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
