//! Error types for the gridmap pipeline.

use std::fmt;
use thiserror::Error;

/// Result type alias using GridMapError.
pub type GridMapResult<T> = Result<T, GridMapError>;

/// Which edge of the grid a coordinate fell beyond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    West,
    East,
    South,
    North,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::West => "west",
            Direction::East => "east",
            Direction::South => "south",
            Direction::North => "north",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-entry error type for the pipeline.
///
/// All of these are recovered locally: the offending entry is skipped and
/// reported, and processing continues with the next line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridMapError {
    /// The line does not have the `color, gridref` shape, or the color is
    /// not in the palette. The two causes deliberately share one message.
    #[error("entry does not look valid: {0:?}")]
    MalformedLine(String),

    #[error("grid reference does not look valid: {0:?}")]
    InvalidGridReference(String),

    #[error("grid reference {reference} lies {direction} of the valid grid")]
    OutOfBounds {
        reference: String,
        direction: Direction,
    },

    #[error("rendering failed: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_malformed_message() {
        // Shape failure and unknown color report identically.
        let a = GridMapError::MalformedLine("purple, O0087".to_string());
        let b = GridMapError::MalformedLine("purple, O0087".to_string());
        assert_eq!(a.to_string(), b.to_string());
        assert!(a.to_string().starts_with("entry does not look valid"));
    }

    #[test]
    fn test_out_of_bounds_message_names_direction() {
        let err = GridMapError::OutOfBounds {
            reference: "D99".to_string(),
            direction: Direction::East,
        };
        assert!(err.to_string().contains("east"));
    }
}
