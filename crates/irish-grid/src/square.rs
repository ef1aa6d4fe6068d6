//! The 100km squares of the Irish Grid.
//!
//! The grid letters follow a 5x5 arrangement read west to east, north to
//! south, with I skipped. The easternmost column (E, K, P, U, Z) lies
//! entirely off the legal extent, so only 20 letters name a square here.

/// A 100km square of the Irish Grid, identified by its letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSquare {
    letter: char,
    easting_offset: i64,
    northing_offset: i64,
}

impl GridSquare {
    /// Look up a square by its (uppercase) letter.
    ///
    /// Returns `None` for the six absent letters and for anything that is
    /// not a letter at all.
    pub fn from_letter(letter: char) -> Option<Self> {
        let (easting_offset, northing_offset) = match letter {
            'A' => (0, 4),
            'B' => (1, 4),
            'C' => (2, 4),
            'D' => (3, 4),
            'F' => (0, 3),
            'G' => (1, 3),
            'H' => (2, 3),
            'J' => (3, 3),
            'L' => (0, 2),
            'M' => (1, 2),
            'N' => (2, 2),
            'O' => (3, 2),
            'Q' => (0, 1),
            'R' => (1, 1),
            'S' => (2, 1),
            'T' => (3, 1),
            'V' => (0, 0),
            'W' => (1, 0),
            'X' => (2, 0),
            'Y' => (3, 0),
            _ => return None,
        };

        Some(Self {
            letter,
            easting_offset,
            northing_offset,
        })
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// Southwest corner of the square in meters from the grid origin.
    pub fn origin(&self) -> (i64, i64) {
        (self.easting_offset * 100_000, self.northing_offset * 100_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGAL_LETTERS: [char; 20] = [
        'A', 'B', 'C', 'D', 'F', 'G', 'H', 'J', 'L', 'M', 'N', 'O', 'Q', 'R',
        'S', 'T', 'V', 'W', 'X', 'Y',
    ];

    #[test]
    fn test_all_legal_letters_resolve() {
        for letter in LEGAL_LETTERS {
            assert!(
                GridSquare::from_letter(letter).is_some(),
                "letter {} should have a square",
                letter
            );
        }
    }

    #[test]
    fn test_absent_letters_rejected() {
        for letter in ['I', 'E', 'K', 'P', 'U', 'Z'] {
            assert!(GridSquare::from_letter(letter).is_none());
        }
        assert!(GridSquare::from_letter('5').is_none());
        assert!(GridSquare::from_letter('a').is_none());
    }

    #[test]
    fn test_known_origins() {
        assert_eq!(GridSquare::from_letter('O').unwrap().origin(), (300_000, 200_000));
        assert_eq!(GridSquare::from_letter('C').unwrap().origin(), (200_000, 400_000));
        assert_eq!(GridSquare::from_letter('A').unwrap().origin(), (0, 400_000));
        assert_eq!(GridSquare::from_letter('V').unwrap().origin(), (0, 0));
        assert_eq!(GridSquare::from_letter('Y').unwrap().origin(), (300_000, 0));
    }

    #[test]
    fn test_squares_are_distinct() {
        let mut origins: Vec<(i64, i64)> = LEGAL_LETTERS
            .iter()
            .map(|&l| GridSquare::from_letter(l).unwrap().origin())
            .collect();
        origins.sort();
        origins.dedup();
        assert_eq!(origins.len(), 20);
    }
}
