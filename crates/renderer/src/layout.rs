//! Canvas geometry shared by the raster and vector paths.

/// Cells per canvas side. The canvas always covers the full 50x50 cell grid
/// regardless of how much of it the land or the records occupy.
pub const GRID_CELLS: u32 = 50;

/// Geometry of the output canvas.
///
/// The cell pitch is larger than the drawn square so neighbouring cells keep
/// a visible gutter: `pitch = size + (size / 5) * 3`, i.e. 1.6x the square
/// side for sizes divisible by five.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    square_size: u32,
    cell_pitch: u32,
}

impl Layout {
    pub fn new(square_size: u32) -> Self {
        let cell_pitch = square_size + (square_size / 5) * 3;
        Self {
            square_size,
            cell_pitch,
        }
    }

    /// Side of one drawn square in pixels.
    pub fn square_size(&self) -> u32 {
        self.square_size
    }

    /// Distance between the origins of adjacent cells in pixels.
    pub fn cell_pitch(&self) -> u32 {
        self.cell_pitch
    }

    /// Side of the square canvas in pixels.
    pub fn canvas_size(&self) -> u32 {
        GRID_CELLS * self.cell_pitch
    }

    /// Pixel origin of a cell.
    ///
    /// Row 0 is the southernmost cell, so the vertical axis flips going into
    /// image coordinates. Land cells and records both go through this one
    /// function, which is what keeps the two passes visually aligned.
    pub fn cell_origin(&self, col: u32, row: u32) -> (u32, u32) {
        (
            col * self.cell_pitch,
            (GRID_CELLS - row - 1) * self.cell_pitch,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_square_size_geometry() {
        let layout = Layout::new(5);
        assert_eq!(layout.cell_pitch(), 8);
        assert_eq!(layout.canvas_size(), 400);
    }

    #[test]
    fn test_cell_origin_flips_rows() {
        let layout = Layout::new(5);
        // Row 0 sits at the bottom of the image.
        assert_eq!(layout.cell_origin(0, 0), (0, 392));
        assert_eq!(layout.cell_origin(0, 49), (0, 0));
        assert_eq!(layout.cell_origin(30, 27), (240, 176));
    }

    #[test]
    fn test_small_sizes_have_no_gutter() {
        // Integer division: below five pixels the pitch equals the square.
        let layout = Layout::new(4);
        assert_eq!(layout.cell_pitch(), 4);
        assert_eq!(layout.canvas_size(), 200);
    }

    #[test]
    fn test_larger_square_size() {
        let layout = Layout::new(10);
        assert_eq!(layout.cell_pitch(), 16);
        assert_eq!(layout.canvas_size(), 800);
    }
}
