//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Quit the application
    Quit,
    /// Force quit the application (Ctrl+C)
    ForceQuit,
    /// Move cursor up
    CursorUp,
    /// Move cursor down
    CursorDown,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Select/confirm action (Enter or Space)
    Select,
    /// Mouse click at board position (row, col)
    Click(usize, usize),
    /// Step back one move (Left arrow)
    Undo,
    /// Step forward one move (Right arrow)
    Redo,
    /// Rewind to the starting position
    Beginning,
    /// Start over, discarding all history
    Reset,
    /// Character input (for dialogs)
    Char(char),
}

/// Board area configuration for mouse click detection.
/// These values should match the render layout.
pub struct BoardArea {
    pub start_row: u16,
    pub start_col: u16,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for BoardArea {
    fn default() -> Self {
        Self {
            // Layout calculation:
            // - Title block: 3 rows (y=0-2)
            // - Content starts at y=3
            // - Board block border: +1 row
            // - Column header row: y=4
            // - Top border row: y=5
            // - First cell row (row=0): y=6
            start_row: 6,
            // - Board block border: +1 col
            // - Rank label + separator: 3 chars ("8 │")
            start_col: 4,
            cell_width: 4,  // Each cell is 4 chars wide (" ● │")
            cell_height: 2, // Each cell is 2 rows tall (content + separator)
        }
    }
}

impl BoardArea {
    /// Maps a terminal position to a board `(row, col)`, if it lies on a cell.
    pub fn cell_at(&self, row: u16, column: u16) -> Option<(usize, usize)> {
        if row < self.start_row || column < self.start_col {
            return None;
        }

        let board_row = (row - self.start_row) / self.cell_height;
        let board_col = (column - self.start_col) / self.cell_width;
        (board_row < 8 && board_col < 8).then_some((board_row as usize, board_col as usize))
    }
}

/// Polls for an event with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c'))
            {
                return Ok(Some(Event::ForceQuit));
            }
            Ok(Some(map_key_event(key.code)))
        }
        CrosstermEvent::Mouse(mouse) => Ok(map_mouse_event(mouse)),
        _ => Ok(None),
    }
}

/// Maps a key code to an application event.
fn map_key_event(code: KeyCode) -> Event {
    match code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => Event::Quit,

        // History navigation
        KeyCode::Left => Event::Undo,
        KeyCode::Right => Event::Redo,
        KeyCode::Home | KeyCode::Char('b') => Event::Beginning,
        KeyCode::Char('r') => Event::Reset,

        // Cursor movement - Up/Down arrows
        KeyCode::Up => Event::CursorUp,
        KeyCode::Down => Event::CursorDown,

        // Cursor movement - WASD
        KeyCode::Char('w') => Event::CursorUp,
        KeyCode::Char('s') => Event::CursorDown,
        KeyCode::Char('a') => Event::CursorLeft,
        KeyCode::Char('d') => Event::CursorRight,

        // Cursor movement - Vim style
        KeyCode::Char('k') => Event::CursorUp,
        KeyCode::Char('j') => Event::CursorDown,
        KeyCode::Char('h') => Event::CursorLeft,
        KeyCode::Char('l') => Event::CursorRight,

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Event::Select,

        KeyCode::Char(c) => Event::Char(c),

        _ => Event::Char('\0'),
    }
}

/// Maps a mouse event to an application event.
fn map_mouse_event(mouse: MouseEvent) -> Option<Event> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => BoardArea::default()
            .cell_at(mouse.row, mouse.column)
            .map(|(row, col)| Event::Click(row, col)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_keys() {
        assert_eq!(map_key_event(KeyCode::Left), Event::Undo);
        assert_eq!(map_key_event(KeyCode::Right), Event::Redo);
        assert_eq!(map_key_event(KeyCode::Char('r')), Event::Reset);
        assert_eq!(map_key_event(KeyCode::Char('b')), Event::Beginning);
        assert_eq!(map_key_event(KeyCode::Home), Event::Beginning);
    }

    #[test]
    fn test_cursor_keys() {
        assert_eq!(map_key_event(KeyCode::Up), Event::CursorUp);
        assert_eq!(map_key_event(KeyCode::Char('j')), Event::CursorDown);
        assert_eq!(map_key_event(KeyCode::Char('a')), Event::CursorLeft);
        assert_eq!(map_key_event(KeyCode::Char('l')), Event::CursorRight);
    }

    #[test]
    fn test_select_and_quit_keys() {
        assert_eq!(map_key_event(KeyCode::Enter), Event::Select);
        assert_eq!(map_key_event(KeyCode::Char(' ')), Event::Select);
        assert_eq!(map_key_event(KeyCode::Esc), Event::Quit);
        assert_eq!(map_key_event(KeyCode::Char('y')), Event::Char('y'));
    }

    #[test]
    fn test_cell_at() {
        let area = BoardArea::default();
        assert_eq!(area.cell_at(6, 4), Some((0, 0)));
        assert_eq!(area.cell_at(7, 7), Some((0, 0)));
        assert_eq!(area.cell_at(8, 8), Some((1, 1)));
        assert_eq!(area.cell_at(20, 33), Some((7, 7)));
        assert_eq!(area.cell_at(5, 10), None);
        assert_eq!(area.cell_at(10, 3), None);
        assert_eq!(area.cell_at(22, 10), None);
        assert_eq!(area.cell_at(10, 36), None);
    }

    #[test]
    fn test_left_click_maps_to_cell() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 9,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_mouse_event(click), Some(Event::Click(2, 1)));

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..click
        };
        assert_eq!(map_mouse_event(release), None);
    }
}
