/// The two sides of a Breakthrough game.
///
/// White starts on the bottom two ranks and moves toward rank 0,
/// Black starts on the top two ranks and moves toward rank 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Returns the other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank delta of a single forward step for this side.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// The opponent's back rank, which this side must reach to win.
    pub fn goal_rank(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// The cell value of a pawn belonging to this side.
    pub fn pawn(self) -> Cell {
        match self {
            Side::White => Cell::WhitePawn,
            Side::Black => Cell::BlackPawn,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

/// Represents the content of a single board square.
///
/// The `Cell` enum has three variants:
///
/// * `Empty` - An unoccupied square.
/// * `WhitePawn` - A square holding a white pawn.
/// * `BlackPawn` - A square holding a black pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    WhitePawn,
    BlackPawn,
}

impl Cell {
    /// Returns the side owning the pawn in this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::WhitePawn => Some(Side::White),
            Cell::BlackPawn => Some(Side::Black),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Converts the cell to its character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Cell::Empty`
    /// * `'W'` for `Cell::WhitePawn`
    /// * `'B'` for `Cell::BlackPawn`
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::WhitePawn => 'W',
            Cell::BlackPawn => 'B',
        }
    }

    /// Parses a cell from its character representation (case-insensitive).
    pub fn from_char(c: char) -> Option<Cell> {
        match c.to_ascii_uppercase() {
            '-' | '.' => Some(Cell::Empty),
            'W' => Some(Cell::WhitePawn),
            'B' => Some(Cell::BlackPawn),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(Side::Black.opposite(), Side::White);
    }

    #[test]
    fn test_direction_and_goal() {
        assert_eq!(Side::White.forward(), -1);
        assert_eq!(Side::Black.forward(), 1);
        assert_eq!(Side::White.goal_rank(), 0);
        assert_eq!(Side::Black.goal_rank(), 7);
    }

    #[test]
    fn test_cell_side() {
        assert_eq!(Cell::Empty.side(), None);
        assert_eq!(Cell::WhitePawn.side(), Some(Side::White));
        assert_eq!(Cell::BlackPawn.side(), Some(Side::Black));
        assert_eq!(Side::White.pawn(), Cell::WhitePawn);
        assert_eq!(Side::Black.pawn(), Cell::BlackPawn);
    }

    #[test]
    fn test_char_conversion() {
        for cell in [Cell::Empty, Cell::WhitePawn, Cell::BlackPawn] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('w'), Some(Cell::WhitePawn));
        assert_eq!(Cell::from_char('X'), None);
    }
}
