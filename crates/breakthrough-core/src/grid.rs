//! Breakthrough board representation.

use std::fmt;

use crate::cell::{Cell, Side};
use crate::error::ParseError;
use crate::notation::Move;
use crate::square::{BOARD_SIZE, Square, TOTAL_SQUARES};

/// An 8x8 board snapshot indexed by `(file, rank)`.
///
/// Rank 0 is Black's back rank (the top of the displayed board) and rank 7 is
/// White's back rank.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Grid {
    /// Creates a grid with the standard starting position.
    ///
    /// Black pawns fill ranks 0 and 1, White pawns fill ranks 6 and 7.
    fn default() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for file in cells.iter_mut() {
            file[0] = Cell::BlackPawn;
            file[1] = Cell::BlackPawn;
            file[BOARD_SIZE - 2] = Cell::WhitePawn;
            file[BOARD_SIZE - 1] = Cell::WhitePawn;
        }
        Grid { cells }
    }
}

impl Grid {
    /// Creates a new grid with the starting position.
    pub fn new() -> Grid {
        Default::default()
    }

    /// Creates a grid with no pawns on it.
    pub fn empty() -> Grid {
        Grid {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a grid from its 64-character string representation.
    ///
    /// Characters are read rank 0 first and files a-h within each rank,
    /// using `-` for empty squares, `W` for white pawns and `B` for black
    /// pawns. Whitespace is ignored so the output of `Display` parses back.
    pub fn from_string(s: &str) -> Result<Grid, ParseError> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != TOTAL_SQUARES {
            return Err(ParseError::InvalidLength(s.to_string()));
        }

        let mut grid = Grid::empty();
        for (sq, c) in Square::iter().zip(chars) {
            let cell = Cell::from_char(c).ok_or(ParseError::InvalidCell(c))?;
            grid.set(sq, cell);
        }
        Ok(grid)
    }

    /// Returns the cell at `sq`, or `None` when the square is off the board.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Cell> {
        if sq.is_valid() {
            Some(self.cells[sq.file as usize][sq.rank as usize])
        } else {
            None
        }
    }

    /// Returns the cell at `sq`.
    ///
    /// # Panics
    ///
    /// Panics if `sq` is off the board.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        assert!(sq.is_valid(), "Square off the board: {sq}");
        self.cells[sq.file as usize][sq.rank as usize]
    }

    /// Writes `cell` into `sq`.
    ///
    /// # Panics
    ///
    /// Panics if `sq` is off the board.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        assert!(sq.is_valid(), "Square off the board: {sq}");
        self.cells[sq.file as usize][sq.rank as usize] = cell;
    }

    /// Counts the squares holding `cell`.
    pub fn count(&self, cell: Cell) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == cell)
            .count() as u32
    }

    /// Returns the side with a pawn on its goal rank, if any.
    pub fn winner(&self) -> Option<Side> {
        [Side::White, Side::Black].into_iter().find(|&side| {
            let rank = side.goal_rank() as usize;
            self.cells.iter().any(|file| file[rank] == side.pawn())
        })
    }

    /// Recovers the single ply that turns `self` into `next`.
    ///
    /// # Returns
    ///
    /// `Some((move, capture))` when exactly one pawn left a square and landed
    /// on another, `None` for any other difference.
    pub fn diff(&self, next: &Grid) -> Option<(Move, bool)> {
        let changed: Vec<Square> = Square::iter()
            .filter(|&sq| self.cell(sq) != next.cell(sq))
            .collect();
        let &[a, b] = changed.as_slice() else {
            return None;
        };

        let (from, to) = if next.cell(a).is_empty() { (a, b) } else { (b, a) };
        let mover = self.cell(from);
        if mover.is_empty() || !next.cell(from).is_empty() || next.cell(to) != mover {
            return None;
        }

        Some((Move::new(from, to), !self.cell(to).is_empty()))
    }
}

impl fmt::Display for Grid {
    /// Writes one line per rank, rank 0 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in 0..BOARD_SIZE {
            for file in 0..BOARD_SIZE {
                write!(f, "{}", self.cells[file][rank].to_char())?;
            }
            if rank + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
