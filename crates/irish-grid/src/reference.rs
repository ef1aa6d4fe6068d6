//! Alphanumeric grid references and their planar coordinates.
//!
//! A reference is one square letter followed by an even number of digits.
//! The digit string splits into two equal halves, easting first, each scaled
//! by a resolution factor determined solely by the digit count: two digits
//! address 10km, four 1km, and so on down to ten digits for 1m. A bare
//! letter addresses the whole 100km square.

use crate::bounds::Coordinate;
use crate::square::GridSquare;
use thiserror::Error;

/// Maximum digits in a reference (five per axis, 1m resolution).
pub const MAX_DIGITS: usize = 10;

/// Meters per digit unit, indexed by digit-pair count.
///
/// Index 0 is the bare-letter case: a reference with no digits still names
/// the 100km square itself.
const RESOLUTIONS: [i64; 6] = [100_000, 10_000, 1_000, 100, 10, 1];

/// A validated Irish Grid reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridReference {
    square: GridSquare,
    digits: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceParseError {
    #[error("empty reference")]
    Empty,

    #[error("no grid square with letter '{0}'")]
    IllegalLetter(char),

    #[error("expected a digit after the square letter, found '{0}'")]
    NonDigit(char),

    #[error("odd digit count: {0}")]
    OddDigitCount(usize),

    #[error("too many digits: {0} (maximum {MAX_DIGITS})")]
    TooManyDigits(usize),
}

impl GridReference {
    /// Parse a raw reference token.
    ///
    /// Uppercases and strips all whitespace before validating, so
    /// `" o 0087 41"` and `"O008741"` are the same reference.
    pub fn parse(raw: &str) -> Result<Self, ReferenceParseError> {
        let normalized: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        let mut chars = normalized.chars();
        let letter = chars.next().ok_or(ReferenceParseError::Empty)?;
        let square = GridSquare::from_letter(letter)
            .ok_or(ReferenceParseError::IllegalLetter(letter))?;

        let digits = chars.as_str();
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(ReferenceParseError::NonDigit(bad));
        }
        if digits.len() % 2 != 0 {
            return Err(ReferenceParseError::OddDigitCount(digits.len()));
        }
        if digits.len() > MAX_DIGITS {
            return Err(ReferenceParseError::TooManyDigits(digits.len()));
        }

        Ok(Self {
            square,
            digits: digits.to_string(),
        })
    }

    /// The normalized reference text, used as the marker label in output.
    pub fn label(&self) -> String {
        format!("{}{}", self.square.letter(), self.digits)
    }

    /// Meters per digit unit at this reference's precision.
    pub fn resolution(&self) -> i64 {
        RESOLUTIONS[self.digits.len() / 2]
    }

    /// Absolute planar coordinate of the referenced point.
    ///
    /// This is the southwest corner of the cell the reference names at its
    /// own resolution.
    pub fn coordinate(&self) -> Coordinate {
        let (easting_origin, northing_origin) = self.square.origin();
        let (easting_digits, northing_digits) = self.digits.split_at(self.digits.len() / 2);
        let resolution = self.resolution();

        Coordinate {
            easting: easting_origin + digit_value(easting_digits) * resolution,
            northing: northing_origin + digit_value(northing_digits) * resolution,
        }
    }
}

/// Parse one half of the digit string as a magnitude.
///
/// Leading zeros carry no magnitude; the empty half of a bare-letter
/// reference is zero.
fn digit_value(digits: &str) -> i64 {
    digits
        .chars()
        .fold(0, |acc, c| acc * 10 + (c as i64 - '0' as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let reference = GridReference::parse(" o 0087 41").unwrap();
        assert_eq!(reference.label(), "O008741");
        assert_eq!(reference, GridReference::parse("O008741").unwrap());
    }

    #[test]
    fn test_parse_rejects_illegal_letters() {
        for letter in ['I', 'E', 'K', 'P', 'U', 'Z'] {
            let raw = format!("{}12", letter);
            assert_eq!(
                GridReference::parse(&raw),
                Err(ReferenceParseError::IllegalLetter(letter))
            );
        }
        assert_eq!(
            GridReference::parse("123"),
            Err(ReferenceParseError::IllegalLetter('1'))
        );
    }

    #[test]
    fn test_parse_rejects_odd_digit_counts() {
        assert_eq!(
            GridReference::parse("O12345"),
            Err(ReferenceParseError::OddDigitCount(5))
        );
        assert_eq!(
            GridReference::parse("O1"),
            Err(ReferenceParseError::OddDigitCount(1))
        );
    }

    #[test]
    fn test_parse_rejects_too_many_digits() {
        assert_eq!(
            GridReference::parse("O123456789012"),
            Err(ReferenceParseError::TooManyDigits(12))
        );
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            GridReference::parse("O12A4"),
            Err(ReferenceParseError::NonDigit('A'))
        );
        assert_eq!(GridReference::parse(""), Err(ReferenceParseError::Empty));
    }

    #[test]
    fn test_bare_letter_reference() {
        // A bare letter names the whole 100km square at its southwest corner.
        let reference = GridReference::parse("N").unwrap();
        assert_eq!(reference.resolution(), 100_000);
        let coordinate = reference.coordinate();
        assert_eq!(coordinate.easting, 200_000);
        assert_eq!(coordinate.northing, 200_000);
    }

    #[test]
    fn test_resolution_per_digit_count() {
        let cases = [
            ("N", 100_000),
            ("N12", 10_000),
            ("N1234", 1_000),
            ("N123456", 100),
            ("N12345678", 10),
            ("N1234567890", 1),
        ];
        for (raw, expected) in cases {
            assert_eq!(GridReference::parse(raw).unwrap().resolution(), expected);
        }
    }

    #[test]
    fn test_coordinate_o008741() {
        let coordinate = GridReference::parse("O008741").unwrap().coordinate();
        assert_eq!(coordinate.easting, 300_800);
        assert_eq!(coordinate.northing, 274_100);
    }

    #[test]
    fn test_coordinate_c948454() {
        let coordinate = GridReference::parse("C948454").unwrap().coordinate();
        assert_eq!(coordinate.easting, 294_800);
        assert_eq!(coordinate.northing, 445_400);
    }

    #[test]
    fn test_leading_zeros_are_magnitude_only() {
        let coordinate = GridReference::parse("V0008").unwrap().coordinate();
        assert_eq!(coordinate.easting, 0);
        assert_eq!(coordinate.northing, 8_000);
    }

    #[test]
    fn test_digit_round_trip() {
        // Decoding then re-encoding at the same digit count recovers the
        // original digit halves.
        for raw in ["O008741", "C948454", "W9604", "S12", "T1234567890"] {
            let reference = GridReference::parse(raw).unwrap();
            let half = (raw.len() - 1) / 2;
            let coordinate = reference.coordinate();
            let (origin_e, origin_n) =
                GridSquare::from_letter(raw.chars().next().unwrap()).unwrap().origin();
            let resolution = reference.resolution();

            let east_digits =
                format!("{:0width$}", (coordinate.easting - origin_e) / resolution, width = half);
            let north_digits =
                format!("{:0width$}", (coordinate.northing - origin_n) / resolution, width = half);
            assert_eq!(format!("{}{}{}", &raw[..1], east_digits, north_digits), raw);
        }
    }
}
