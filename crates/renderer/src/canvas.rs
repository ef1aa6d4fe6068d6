//! A paletted pixel canvas for the raster path.

/// A fixed-palette canvas holding one palette index per pixel.
///
/// The map only ever uses a handful of colors, so pixels are stored as
/// palette indices and the PNG encoder consumes them directly.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl Canvas {
    /// Create a canvas filled with the given background palette index.
    pub fn new(width: u32, height: u32, background: u8) -> Self {
        Self {
            width,
            height,
            indices: vec![background; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill an axis-aligned rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, index: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let x_end = x.saturating_add(width).min(self.width) as usize;
        let y_end = y.saturating_add(height).min(self.height) as usize;

        for row in y as usize..y_end {
            let start = row * self.width as usize + x as usize;
            let end = row * self.width as usize + x_end;
            self.indices[start..end].fill(index);
        }
    }

    /// Palette index of one pixel.
    pub fn index_at(&self, x: u32, y: u32) -> u8 {
        self.indices[(y * self.width + x) as usize]
    }

    /// The raw index data, row-major.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }
}
