//! Board widget for rendering the Breakthrough board.

use breakthrough_core::{
    cell::Cell,
    grid::Grid,
    square::{BOARD_SIZE, Square},
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Widget for rendering the Breakthrough board.
pub struct BoardWidget<'a> {
    /// The grid to render
    grid: &'a Grid,
    /// Cursor position (row, col)
    cursor: (usize, usize),
    /// Square of the picked-up pawn
    selected: Option<Square>,
    /// Legal destinations of the picked-up pawn
    targets: &'a [Square],
}

impl<'a> BoardWidget<'a> {
    /// Creates a new board widget.
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            cursor: (0, 0),
            selected: None,
            targets: &[],
        }
    }

    /// Sets the cursor position.
    pub fn cursor(mut self, row: usize, col: usize) -> Self {
        self.cursor = (row, col);
        self
    }

    /// Sets the picked-up pawn and where it may go.
    pub fn selection(mut self, selected: Option<Square>, targets: &'a [Square]) -> Self {
        self.selected = selected;
        self.targets = targets;
        self
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Minimum size check
        if area.width < 36 || area.height < 18 {
            return;
        }

        // Column headers
        let mut header = vec![Span::raw("    ")];
        for (i, file) in ('a'..='h').enumerate() {
            if i > 0 {
                header.push(Span::raw("   "));
            }
            header.push(Span::styled(
                file.to_string(),
                Style::default().fg(Color::Cyan),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(header), area.width);

        let top_border = "  ┌───┬───┬───┬───┬───┬───┬───┬───┐";
        buf.set_string(area.x, area.y + 1, top_border, Style::default());

        for row in 0..BOARD_SIZE {
            let y = area.y + 2 + (row as u16) * 2;

            let row_num = format!("{} │", BOARD_SIZE - row);
            buf.set_string(area.x, y, &row_num, Style::default().fg(Color::Cyan));

            for col in 0..BOARD_SIZE {
                let sq = Square::from_indices(col, row);
                let cell = self.grid.cell(sq);
                let is_target = self.targets.contains(&sq);
                let is_cursor = self.cursor == (row, col);
                let is_selected = self.selected == Some(sq);

                let (content, mut style) = match cell {
                    Cell::BlackPawn => (" ● ", Style::default().fg(Color::Green)),
                    Cell::WhitePawn => (" ○ ", Style::default().fg(Color::Yellow)),
                    Cell::Empty if is_target => (" · ", Style::default().fg(Color::DarkGray)),
                    Cell::Empty => ("   ", Style::default()),
                };

                // Capturable pawn
                if is_target && !cell.is_empty() {
                    style = style.bg(Color::Rgb(90, 40, 40));
                }

                if is_selected {
                    style = style.bg(Color::Rgb(50, 50, 80)).add_modifier(Modifier::BOLD);
                }

                if is_cursor {
                    style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                }

                let x = area.x + 3 + (col as u16) * 4;
                buf.set_string(x, y, content, style);

                // Cell separator
                if col < BOARD_SIZE - 1 {
                    buf.set_string(x + 3, y, "│", Style::default());
                }
            }

            // Right border
            buf.set_string(area.x + 34, y, "│", Style::default());

            if row < BOARD_SIZE - 1 {
                let separator = "  ├───┼───┼───┼───┼───┼───┼───┼───┤";
                buf.set_string(area.x, y + 1, separator, Style::default());
            }
        }

        let bottom_border = "  └───┴───┴───┴───┴───┴───┴───┴───┘";
        buf.set_string(area.x, area.y + 17, bottom_border, Style::default());

        let cursor_sq = Square::from_indices(self.cursor.1, self.cursor.0);
        let cursor_info = format!("  Cursor: {cursor_sq}");
        buf.set_string(
            area.x,
            area.y + 18,
            &cursor_info,
            Style::default().fg(Color::Cyan),
        );
    }
}
