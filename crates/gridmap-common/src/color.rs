//! The fixed marker color palette.

use std::fmt;

/// Marker colors accepted in input entries.
///
/// The palette is closed: any other color name rejects the whole entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Black,
    Grey,
    White,
}

impl Color {
    /// Every palette color, in a fixed order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Black,
        Color::Grey,
        Color::White,
    ];

    /// Look up a color by name, case-insensitively.
    ///
    /// Returns `None` for anything outside the palette.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.to_ascii_lowercase();

        match normalized.as_str() {
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "black" => Some(Color::Black),
            "grey" => Some(Color::Grey),
            "white" => Some(Color::White),
            _ => None,
        }
    }

    /// The canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Black => "black",
            Color::Grey => "grey",
            Color::White => "white",
        }
    }

    /// Convert to an RGB triple.
    ///
    /// Used for both SVG fills and the PNG palette, so the two output paths
    /// agree on what each color looks like.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Blue => (0, 0, 255),
            Color::Black => (0, 0, 0),
            Color::Grey => (128, 128, 128),
            Color::White => (255, 255, 255),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
