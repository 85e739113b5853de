//! TUI (Terminal User Interface) for the Breakthrough CLI.
//!
//! This module provides the interactive board using ratatui, supporting
//! keyboard navigation, mouse input, undo/redo and transcript replay.

use std::time::Duration;

use breakthrough_core::game_state::GameState;

mod app;
mod event;
mod render;
mod widgets;

pub use app::{App, AppMode};

/// Runs the TUI until the user quits.
///
/// # Arguments
/// * `game` - Game to display and play on
/// * `mode` - Interactive play or transcript replay
/// * `tick` - In replay mode, advance one move per tick
pub fn run(game: GameState, mode: AppMode, tick: Option<Duration>) -> Result<(), String> {
    let app = App::new(game, mode, tick);

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    result.map_err(|e| e.to_string())
}
