use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Constants for board dimensions
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// A `(file, rank)` coordinate on the Breakthrough board.
///
/// Files run `a`-`h` left to right as indices 0-7. Ranks are counted from the
/// top of the board: index 0 is the displayed rank "8" (White's goal) and
/// index 7 is the displayed rank "1" (Black's goal).
///
/// ```text
///     a b c d e f g h
/// 8   0 . . . . . . .   <- rank index 0
/// 7   1
/// ...
/// 1   7                 <- rank index 7
/// ```
///
/// Coordinates are signed and may lie off the board, so callers can pass raw
/// input to legality checks and let them reject it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Square {
        Square { file, rank }
    }

    /// Returns whether the coordinate lies on the 8x8 board.
    #[inline]
    pub fn is_valid(self) -> bool {
        (0..BOARD_SIZE as i8).contains(&self.file) && (0..BOARD_SIZE as i8).contains(&self.rank)
    }

    /// Creates a square from unsigned board indices.
    ///
    /// # Panics
    ///
    /// Panics if either `file` or `rank` is >= 8.
    pub fn from_indices(file: usize, rank: usize) -> Square {
        assert!(file < BOARD_SIZE, "Invalid file: {file}");
        assert!(rank < BOARD_SIZE, "Invalid rank: {rank}");
        Square::new(file as i8, rank as i8)
    }

    /// Returns the square shifted by the given deltas, which may be off the board.
    #[inline]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Square {
        Square::new(
            self.file.saturating_add(file_delta),
            self.rank.saturating_add(rank_delta),
        )
    }

    /// Returns an iterator over all 64 squares, rank 0 first and files a-h
    /// within each rank.
    pub fn iter() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(|i| Square::from_indices(i % BOARD_SIZE, i / BOARD_SIZE))
    }
}

impl FromStr for Square {
    type Err = ParseError;

    /// Parses a square name such as `"a2"`.
    ///
    /// The file is a lower-case letter `a`-`h`; the rank digit `d` maps to
    /// rank index `8 - d`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(ParseError::InvalidLength(s.to_string()));
        }

        let file_char = chars[0];
        let rank_char = chars[1];

        if !('a'..='h').contains(&file_char) {
            return Err(ParseError::InvalidFile(file_char));
        }
        if !('1'..='8').contains(&rank_char) {
            return Err(ParseError::InvalidRank(rank_char));
        }

        let file = (file_char as u8 - b'a') as i8;
        let rank = BOARD_SIZE as i8 - (rank_char as u8 - b'0') as i8;
        Ok(Square::new(file, rank))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({}, {})", self.file, self.rank);
        }

        let file = (b'a' + self.file as u8) as char;
        let rank = BOARD_SIZE as i8 - self.rank;
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_from_str() {
        assert_eq!(Square::from_str("a2").unwrap(), Square::new(0, 6));
        assert_eq!(Square::from_str("a3").unwrap(), Square::new(0, 5));
        assert_eq!(Square::from_str("a8").unwrap(), Square::new(0, 0));
        assert_eq!(Square::from_str("h1").unwrap(), Square::new(7, 7));
        assert_eq!(Square::from_str("b7").unwrap(), Square::new(1, 1));

        assert!(Square::from_str("i1").is_err());
        assert!(Square::from_str("a9").is_err());
        assert!(Square::from_str("").is_err());
        assert!(Square::from_str("abc").is_err());

        match Square::from_str("B7").unwrap_err() {
            ParseError::InvalidFile('B') => (),
            e => panic!("Expected InvalidFile error, got {e:?}"),
        }
        match Square::from_str("z1").unwrap_err() {
            ParseError::InvalidFile('z') => (),
            e => panic!("Expected InvalidFile error, got {e:?}"),
        }
        match Square::from_str("a0").unwrap_err() {
            ParseError::InvalidRank('0') => (),
            e => panic!("Expected InvalidRank error, got {e:?}"),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(0, 6).to_string(), "a2");
        assert_eq!(Square::new(7, 0).to_string(), "h8");
        assert_eq!(Square::new(-1, 3).to_string(), "(-1, 3)");
    }

    #[test]
    fn test_is_valid() {
        assert!(Square::new(0, 0).is_valid());
        assert!(Square::new(7, 7).is_valid());
        assert!(!Square::new(8, 0).is_valid());
        assert!(!Square::new(0, -1).is_valid());
    }

    #[test]
    fn test_iter() {
        let squares: Vec<Square> = Square::iter().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[8], Square::new(0, 1));
        assert_eq!(squares[63], Square::new(7, 7));
        assert!(squares.iter().all(|sq| sq.is_valid()));
    }
}
