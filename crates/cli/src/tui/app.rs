//! Application state and main loop for the TUI.

use std::time::{Duration, Instant};

use breakthrough_core::game_state::GameState;
use breakthrough_core::square::{BOARD_SIZE, Square};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use super::event::{self, Event};
use super::render;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How the board is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Two players take turns on the same board
    Play,
    /// Stepping through a loaded transcript
    Replay,
}

impl AppMode {
    /// Returns a display string for the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppMode::Play => "Play",
            AppMode::Replay => "Replay",
        }
    }
}

/// UI mode for handling different interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal game play mode
    Normal,
    /// Confirming quit
    ConfirmQuit,
}

/// Main application state.
pub struct App {
    /// Current game state
    pub game: GameState,
    /// Play or replay
    pub mode: AppMode,
    /// Current UI mode
    pub ui_mode: UiMode,
    /// Cursor position on the board as (row, col); row 0 is rank 8
    pub cursor: (usize, usize),
    /// Square of the pawn picked up by the first click
    pub selected: Option<Square>,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Status message to display
    pub status_message: Option<String>,
    /// Automatic replay step interval
    tick: Option<Duration>,
    last_tick: Instant,
}

impl App {
    /// Creates a new App instance.
    pub fn new(game: GameState, mode: AppMode, tick: Option<Duration>) -> Self {
        Self {
            game,
            mode,
            ui_mode: UiMode::Normal,
            cursor: (6, 4), // White's e-pawn
            selected: None,
            should_quit: false,
            status_message: None,
            tick: if mode == AppMode::Replay { tick } else { None },
            last_tick: Instant::now(),
        }
    }

    /// Runs the main TUI loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;
        info!(mode = self.mode.as_str(), "board opened");

        loop {
            terminal.draw(|frame| render::render(frame, &self))?;

            let timeout = match self.tick {
                Some(tick) => tick.saturating_sub(self.last_tick.elapsed()).min(POLL_INTERVAL),
                None => POLL_INTERVAL,
            };
            if let Some(event) = event::poll_event(timeout)? {
                self.handle_event(event);
            }

            if let Some(tick) = self.tick
                && self.last_tick.elapsed() >= tick
            {
                self.last_tick = Instant::now();
                self.auto_step();
            }

            if self.should_quit {
                break;
            }
        }

        crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture)?;
        info!(ply = self.game.ply(), "board closed");

        Ok(())
    }

    /// Returns the square under the cursor.
    pub fn cursor_square(&self) -> Square {
        Square::from_indices(self.cursor.1, self.cursor.0)
    }

    /// Returns the legal destinations of the selected pawn.
    pub fn targets(&self) -> Vec<Square> {
        self.selected
            .map(|from| self.game.legal_destinations(from))
            .unwrap_or_default()
    }

    /// Handles an input event.
    fn handle_event(&mut self, event: Event) {
        match self.ui_mode {
            UiMode::Normal => self.handle_normal_event(event),
            UiMode::ConfirmQuit => self.handle_confirm_quit_event(event),
        }
    }

    /// Handles events in normal mode.
    fn handle_normal_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit => {
                self.should_quit = true;
            }
            Event::Quit => {
                self.ui_mode = UiMode::ConfirmQuit;
            }
            Event::CursorUp => {
                if self.cursor.0 > 0 {
                    self.cursor.0 -= 1;
                }
            }
            Event::CursorDown => {
                if self.cursor.0 < BOARD_SIZE - 1 {
                    self.cursor.0 += 1;
                }
            }
            Event::CursorLeft => {
                if self.cursor.1 > 0 {
                    self.cursor.1 -= 1;
                }
            }
            Event::CursorRight => {
                if self.cursor.1 < BOARD_SIZE - 1 {
                    self.cursor.1 += 1;
                }
            }
            Event::Select => match self.mode {
                AppMode::Play => self.select_square(self.cursor_square()),
                AppMode::Replay => self.redo_move(),
            },
            Event::Click(row, col) => {
                if row < BOARD_SIZE && col < BOARD_SIZE {
                    self.cursor = (row, col);
                    self.select_square(self.cursor_square());
                }
            }
            Event::Undo => self.undo_move(),
            Event::Redo => self.redo_move(),
            Event::Beginning => self.rewind(),
            Event::Reset => self.reset(),
            Event::Char(_) => {}
        }
    }

    /// Handles events in quit confirmation mode.
    fn handle_confirm_quit_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit | Event::Char('y') | Event::Char('Y') => {
                self.should_quit = true;
            }
            Event::Char('n') | Event::Char('N') | Event::Quit => {
                self.ui_mode = UiMode::Normal;
            }
            _ => {}
        }
    }

    /// Two-step pick-and-drop input.
    ///
    /// The first pick must be a pawn of the side to move. With a pawn picked,
    /// a legal destination moves it, another own pawn replaces the pick and
    /// picking the same square again drops it.
    fn select_square(&mut self, sq: Square) {
        let own = self.game.side_to_move().pawn();

        let Some(from) = self.selected else {
            if self.game.is_over() {
                self.status_message = Some("Game is over!".to_string());
            } else if self.game.cell(sq) == Some(own) {
                self.selected = Some(sq);
                self.status_message = None;
            } else {
                self.status_message =
                    Some(format!("Select a {} pawn", self.game.side_to_move().as_str()));
            }
            return;
        };

        if from == sq {
            self.selected = None;
            self.status_message = None;
        } else if self.game.is_legal(from, sq) {
            match self.game.make_move(from, sq) {
                Ok(()) => {
                    self.selected = None;
                    // Just forked off the recorded line
                    self.status_message = if self.game.alternate_index() == Some(0) {
                        Some("Exploring alternate line".to_string())
                    } else {
                        None
                    };
                }
                Err(err) => self.status_message = Some(err.to_string()),
            }
        } else if self.game.cell(sq) == Some(own) {
            self.selected = Some(sq);
        } else {
            debug!(%from, to = %sq, "rejected board input");
            self.status_message = Some("Illegal move".to_string());
        }
    }

    /// Undoes the last move.
    fn undo_move(&mut self) {
        self.selected = None;
        self.status_message = if self.game.undo() {
            None
        } else {
            Some("Nothing to undo".to_string())
        };
    }

    /// Steps forward along the recorded line.
    fn redo_move(&mut self) {
        self.selected = None;
        self.status_message = if self.game.redo() {
            None
        } else if self.game.in_alternate() {
            Some("No recorded moves in alternate line".to_string())
        } else {
            Some("Nothing to redo".to_string())
        };
    }

    /// Advances the replay by one move, stopping the timer at the end.
    ///
    /// Stepping pauses while an alternate line is active and resumes once it
    /// has been undone back to the recorded line.
    fn auto_step(&mut self) {
        if self.ui_mode != UiMode::Normal || self.selected.is_some() {
            return;
        }
        if self.game.in_alternate() {
            self.status_message = Some("Replay paused in alternate line".to_string());
            return;
        }
        if !self.game.redo() {
            self.tick = None;
            self.status_message = Some("End of transcript".to_string());
        }
    }

    /// Rewinds to the starting position.
    fn rewind(&mut self) {
        self.game.beginning();
        self.selected = None;
        self.status_message = Some("Back to the starting position".to_string());
    }

    /// Starts a new game.
    fn reset(&mut self) {
        self.game.reset();
        self.selected = None;
        self.tick = None;
        self.status_message = Some("New game started".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakthrough_core::cell::{Cell, Side};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    fn click(app: &mut App, name: &str) {
        let square = sq(name);
        app.handle_event(Event::Click(square.rank as usize, square.file as usize));
    }

    fn play_app() -> App {
        App::new(GameState::new(), AppMode::Play, None)
    }

    #[test]
    fn test_cursor_square() {
        let mut app = play_app();
        assert_eq!(app.cursor_square(), sq("e2"));
        app.handle_event(Event::CursorUp);
        app.handle_event(Event::CursorLeft);
        assert_eq!(app.cursor_square(), sq("d3"));
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = play_app();
        app.cursor = (0, 0);
        app.handle_event(Event::CursorUp);
        app.handle_event(Event::CursorLeft);
        assert_eq!(app.cursor, (0, 0));
        app.cursor = (7, 7);
        app.handle_event(Event::CursorDown);
        app.handle_event(Event::CursorRight);
        assert_eq!(app.cursor, (7, 7));
    }

    #[test]
    fn test_click_to_move() {
        let mut app = play_app();
        click(&mut app, "e2");
        assert_eq!(app.selected, Some(sq("e2")));
        let mut targets = app.targets();
        targets.sort_by_key(|s| s.file);
        assert_eq!(targets, vec![sq("d3"), sq("e3"), sq("f3")]);

        click(&mut app, "e3");
        assert_eq!(app.selected, None);
        assert_eq!(app.game.cell(sq("e3")), Some(Cell::WhitePawn));
        assert_eq!(app.game.side_to_move(), Side::Black);
    }

    #[test]
    fn test_first_pick_must_be_side_to_move() {
        let mut app = play_app();
        click(&mut app, "e7");
        assert_eq!(app.selected, None);
        assert!(app.status_message.is_some());
        click(&mut app, "e4");
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_reselect_and_drop() {
        let mut app = play_app();
        click(&mut app, "e2");
        click(&mut app, "d2");
        assert_eq!(app.selected, Some(sq("d2")));
        click(&mut app, "d2");
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_illegal_target_keeps_selection() {
        let mut app = play_app();
        click(&mut app, "e2");
        click(&mut app, "e5");
        assert_eq!(app.selected, Some(sq("e2")));
        assert_eq!(app.status_message.as_deref(), Some("Illegal move"));
        assert_eq!(app.game.ply(), 0);
    }

    #[test]
    fn test_undo_redo_keys() {
        let mut app = play_app();
        click(&mut app, "e2");
        click(&mut app, "e3");
        app.handle_event(Event::Undo);
        assert_eq!(app.game.ply(), 0);
        app.handle_event(Event::Undo);
        assert_eq!(app.status_message.as_deref(), Some("Nothing to undo"));
        app.handle_event(Event::Redo);
        assert_eq!(app.game.ply(), 1);
        assert_eq!(app.game.side_to_move(), Side::Black);
    }

    #[test]
    fn test_move_after_undo_opens_alternate() {
        let mut app = play_app();
        click(&mut app, "e2");
        click(&mut app, "e3");
        app.handle_event(Event::Undo);
        click(&mut app, "a2");
        click(&mut app, "a3");
        assert!(app.game.in_alternate());
        app.handle_event(Event::Redo);
        assert_eq!(
            app.status_message.as_deref(),
            Some("No recorded moves in alternate line")
        );
    }

    #[test]
    fn test_reset_and_beginning() {
        let game = GameState::from_transcript("a2-a3;b7-b6").unwrap();
        let mut app = App::new(game, AppMode::Play, None);
        app.handle_event(Event::Beginning);
        assert_eq!(app.game.ply(), 0);
        assert_eq!(app.game.history_len(), 3);
        app.handle_event(Event::Reset);
        assert_eq!(app.game.history_len(), 1);
    }

    #[test]
    fn test_replay_select_steps_forward() {
        let mut game = GameState::from_transcript("a2-a3;b7-b6").unwrap();
        game.beginning();
        let mut app = App::new(game, AppMode::Replay, Some(Duration::from_millis(10)));
        app.handle_event(Event::Select);
        assert_eq!(app.game.ply(), 1);
        app.handle_event(Event::Select);
        app.handle_event(Event::Select);
        assert_eq!(app.game.ply(), 2);
        assert_eq!(app.status_message.as_deref(), Some("Nothing to redo"));
    }

    #[test]
    fn test_auto_step_stops_at_end() {
        let mut game = GameState::from_transcript("a2-a3").unwrap();
        game.beginning();
        let mut app = App::new(game, AppMode::Replay, Some(Duration::from_millis(10)));
        app.auto_step();
        assert_eq!(app.game.ply(), 1);
        assert!(app.tick.is_some());
        app.auto_step();
        assert!(app.tick.is_none());
    }

    #[test]
    fn test_auto_step_pauses_in_alternate() {
        let mut game = GameState::from_transcript("a2-a3;b7-b6").unwrap();
        game.beginning();
        let mut app = App::new(game, AppMode::Replay, Some(Duration::from_millis(10)));
        app.auto_step();
        click(&mut app, "h7");
        click(&mut app, "h6");
        assert!(app.game.in_alternate());

        app.auto_step();
        assert!(app.tick.is_some());
        assert_eq!(app.game.ply(), 2);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Replay paused in alternate line")
        );

        app.handle_event(Event::Undo);
        app.auto_step();
        assert_eq!(app.game.ply(), 2);
        assert!(!app.game.in_alternate());
        assert_eq!(app.game.cell(sq("b6")), Some(Cell::BlackPawn));
    }

    #[test]
    fn test_play_mode_ignores_tick() {
        let app = App::new(GameState::new(), AppMode::Play, Some(Duration::from_millis(10)));
        assert!(app.tick.is_none());
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = play_app();
        app.handle_event(Event::Quit);
        assert_eq!(app.ui_mode, UiMode::ConfirmQuit);
        app.handle_event(Event::Char('n'));
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(!app.should_quit);
        app.handle_event(Event::Quit);
        app.handle_event(Event::Char('y'));
        assert!(app.should_quit);
    }
}
