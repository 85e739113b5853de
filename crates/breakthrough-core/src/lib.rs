//! Breakthrough game engine.
//!
//! Board representation, single-ply move validation, move application, win
//! detection and a snapshot history with undo/redo and one alternate branch.
//! Presentation layers drive it through [`GameState`](game_state::GameState).

pub mod cell;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod notation;
pub mod square;
