//! Game state management for Breakthrough.
//!
//! This module provides the `GameState` struct which owns the board history
//! and handles core game logic: legality checks, making moves, win detection,
//! and undo/redo over a main line with at most one alternate branch.

use tracing::{debug, trace};

use crate::cell::{Cell, Side};
use crate::error::{Error, IllegalMoveError};
use crate::grid::Grid;
use crate::notation::{self, MOVE_SEPARATOR, Move};
use crate::square::Square;

/// Represents the state of a Breakthrough game.
///
/// History is kept as full grid snapshots. The main line is the sequence of
/// positions actually recorded; `grid_idx` selects the displayed one. Making a
/// move after undoing forks an alternate branch, which then becomes the source
/// of the active grid until it is undone back past its root.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Main line snapshots. `history[0]` is always the starting position.
    history: Vec<Grid>,
    /// Cursor into `history`.
    grid_idx: usize,
    /// Alternate branch snapshots; the last one is the active grid.
    /// Never empty while `Some`.
    alternate: Option<Vec<Grid>>,
    /// Which side moves next.
    side_to_move: Side,
    /// Set once a pawn reaches its goal rank.
    over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates a new game in the starting position with White to move.
    pub fn new() -> Self {
        Self {
            history: vec![Grid::new()],
            grid_idx: 0,
            alternate: None,
            side_to_move: Side::White,
            over: false,
        }
    }

    /// Creates a game by parsing a `;`-separated transcript and playing every
    /// move in it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for a malformed token and
    /// [`Error::IllegalMove`] for the first move that is not legal.
    pub fn from_transcript(line: &str) -> Result<Self, Error> {
        let moves = notation::parse_transcript(line)?;
        let mut game = Self::new();
        game.play(&moves)?;
        Ok(game)
    }

    /// Returns the active grid: the tip of the alternate branch when one
    /// exists, otherwise the main line snapshot under the cursor.
    pub fn grid(&self) -> &Grid {
        self.alternate
            .as_ref()
            .and_then(|alt| alt.last())
            .unwrap_or(&self.history[self.grid_idx])
    }

    /// Returns the cell at `sq` in the active grid, `None` if off the board.
    pub fn cell(&self, sq: Square) -> Option<Cell> {
        self.grid().get(sq)
    }

    /// Returns which side moves next.
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Returns whether a pawn has reached its goal rank.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Returns the winning side of the active grid, if any.
    pub fn winner(&self) -> Option<Side> {
        self.grid().winner()
    }

    /// Returns whether an alternate branch is active.
    pub fn in_alternate(&self) -> bool {
        self.alternate.is_some()
    }

    /// Returns the main line snapshots.
    pub fn history(&self) -> &[Grid] {
        &self.history
    }

    /// Returns the number of main line snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns the main line cursor.
    pub fn grid_index(&self) -> usize {
        self.grid_idx
    }

    /// Returns the cursor into the alternate branch, if one exists.
    pub fn alternate_index(&self) -> Option<usize> {
        self.alternate.as_ref().map(|alt| alt.len() - 1)
    }

    /// Returns the number of plies between the starting position and the
    /// active grid.
    pub fn ply(&self) -> usize {
        match &self.alternate {
            Some(alt) => self.grid_idx + alt.len(),
            None => self.grid_idx,
        }
    }

    /// Returns the pawn count for both sides as `(white, black)`.
    pub fn material(&self) -> (u32, u32) {
        let grid = self.grid();
        (grid.count(Cell::WhitePawn), grid.count(Cell::BlackPawn))
    }

    /// Returns the number of White pawns on the active grid.
    pub fn white_count(&self) -> u32 {
        self.grid().count(Cell::WhitePawn)
    }

    /// Returns the number of Black pawns on the active grid.
    pub fn black_count(&self) -> u32 {
        self.grid().count(Cell::BlackPawn)
    }

    /// Checks whether moving the pawn on `from` to `to` is legal.
    ///
    /// A pawn steps one rank toward its goal, either straight ahead onto an
    /// empty square or one file diagonally onto a square that is empty or
    /// holds an opposing pawn. Nothing is legal once the game is over.
    /// Side to move is not checked here.
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        if self.over {
            return false;
        }

        if (i16::from(from.file) - i16::from(to.file)).abs() > 1 {
            return false;
        }

        if !from.is_valid() || !to.is_valid() {
            return false;
        }

        let grid = self.grid();
        let Some(mover) = grid.cell(from).side() else {
            return false;
        };

        if i16::from(to.rank) != i16::from(from.rank) + i16::from(mover.forward()) {
            return false;
        }

        let target = grid.cell(to);
        if from.file == to.file {
            // No straight-ahead captures
            target.is_empty()
        } else {
            target.side() != Some(mover)
        }
    }

    /// Returns every square the pawn on `from` may legally move to.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some(mover) = self.cell(from).and_then(Cell::side) else {
            return Vec::new();
        };

        (-1..=1)
            .map(|df| from.offset(df, mover.forward()))
            .filter(|&to| self.is_legal(from, to))
            .collect()
    }

    /// Moves the pawn on `from` to `to`, capturing whatever stands there.
    ///
    /// The active grid is copied before it is changed, so earlier snapshots
    /// are never modified.
    ///
    /// # Errors
    ///
    /// Returns an [`IllegalMoveError`] if `is_legal(from, to)` is false; the
    /// state is left untouched in that case.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<(), IllegalMoveError> {
        if !self.is_legal(from, to) {
            trace!(%from, %to, ply = self.ply(), "rejected illegal move");
            return Err(IllegalMoveError {
                ply: self.ply(),
                from,
                to,
            });
        }

        let mut next = *self.grid();
        let mover = next.cell(from);
        next.set(from, Cell::Empty);
        next.set(to, mover);
        self.push_snapshot(next);

        if let Some(side) = mover.side()
            && to.rank == side.goal_rank()
        {
            self.over = true;
            debug!(side = side.as_str(), "goal rank reached");
        }
        self.side_to_move = self.side_to_move.opposite();

        debug!(%from, %to, ply = self.ply(), alternate = self.in_alternate(), "move applied");
        Ok(())
    }

    /// Plays the moves in order, stopping at the first illegal one.
    pub fn play(&mut self, moves: &[Move]) -> Result<(), IllegalMoveError> {
        moves
            .iter()
            .try_for_each(|mv| self.make_move(mv.from, mv.to))
    }

    /// Appends `snapshot` to the line the next move belongs to.
    fn push_snapshot(&mut self, snapshot: Grid) {
        if let Some(alt) = &mut self.alternate {
            alt.push(snapshot);
        } else if self.grid_idx + 1 < self.history.len() {
            debug!(grid_idx = self.grid_idx, "forking alternate branch");
            self.alternate = Some(vec![snapshot]);
        } else {
            self.history.push(snapshot);
            self.grid_idx += 1;
        }
    }

    /// Steps back one ply.
    ///
    /// Inside an alternate branch the tip is discarded; undoing the branch
    /// root discards the branch and returns to the main line.
    ///
    /// # Returns
    ///
    /// `true` if the position changed, `false` at the start of history.
    pub fn undo(&mut self) -> bool {
        if let Some(alt) = &mut self.alternate {
            alt.pop();
            if alt.is_empty() {
                debug!(grid_idx = self.grid_idx, "alternate branch discarded");
                self.alternate = None;
            }
        } else if self.grid_idx > 0 {
            self.grid_idx -= 1;
        } else {
            return false;
        }

        self.after_navigation();
        true
    }

    /// Steps forward one ply along the main line.
    ///
    /// # Returns
    ///
    /// `true` if the position changed. Always `false` inside an alternate
    /// branch, which has no recorded future.
    pub fn redo(&mut self) -> bool {
        if self.alternate.is_some() || self.grid_idx + 1 >= self.history.len() {
            return false;
        }

        self.grid_idx += 1;
        self.after_navigation();
        true
    }

    /// Rewinds to the starting position, keeping the main line recorded.
    pub fn beginning(&mut self) {
        self.alternate = None;
        self.grid_idx = 0;
        self.side_to_move = Side::White;
        self.over = self.grid().winner().is_some();
        debug!(history_len = self.history.len(), "rewound to beginning");
    }

    /// Discards all history and restores the starting position.
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Grid::new());
        self.grid_idx = 0;
        self.alternate = None;
        self.side_to_move = Side::White;
        self.over = false;
        debug!("game reset");
    }

    fn after_navigation(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.over = self.grid().winner().is_some();
        debug!(ply = self.ply(), alternate = self.in_alternate(), "navigated");
    }

    /// Returns the plies leading to the active grid, each paired with
    /// whether it captured.
    pub fn moves(&self) -> Vec<(Move, bool)> {
        let main = &self.history[..=self.grid_idx];
        let line: Vec<&Grid> = main
            .iter()
            .chain(self.alternate.iter().flatten())
            .collect();

        line.windows(2)
            .filter_map(|pair| pair[0].diff(pair[1]))
            .collect()
    }

    /// Returns the transcript of the active line, e.g. `"a2-a3;b7-b6;a3xb4"`.
    pub fn transcript(&self) -> String {
        self.moves()
            .into_iter()
            .map(|(mv, capture)| notation::format_move(mv, capture))
            .collect::<Vec<_>>()
            .join(MOVE_SEPARATOR)
    }
}
