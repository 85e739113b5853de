//! Rendering logic for the TUI.

use breakthrough_core::cell::Side;
use breakthrough_core::notation;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::app::{App, AppMode, UiMode};
use super::widgets::BoardWidget;

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: title, content, help bar
    let main_layout = Layout::vertical([
        Constraint::Length(3), // Title
        Constraint::Min(21),   // Content
        Constraint::Length(3), // Help bar
    ])
    .split(area);

    render_title(frame, main_layout[0]);
    render_content(frame, main_layout[1], app);
    render_help_bar(frame, main_layout[2], app);

    if app.ui_mode == UiMode::ConfirmQuit {
        render_quit_dialog(frame);
    }
}

/// Renders the title bar.
fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Breakthrough ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

/// Renders the main content area (board + info panel).
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let content_layout = Layout::horizontal([
        Constraint::Length(42), // Board area
        Constraint::Min(20),    // Info panel
    ])
    .split(area);

    render_board(frame, content_layout[0], app);
    render_info_panel(frame, content_layout[1], app);
}

/// Renders the game board.
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Board ");

    let inner_area = board_block.inner(area);
    frame.render_widget(board_block, area);

    let targets = app.targets();
    let board_widget = BoardWidget::new(app.game.grid())
        .cursor(app.cursor.0, app.cursor.1)
        .selection(app.selected, &targets);

    frame.render_widget(board_widget, inner_area);
}

fn side_style(side: Side) -> Style {
    match side {
        Side::Black => Style::default().fg(Color::Green),
        Side::White => Style::default().fg(Color::Yellow),
    }
}

/// Renders the information panel.
fn render_info_panel(frame: &mut Frame, area: Rect, app: &App) {
    let info_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Info ");

    let inner_area = info_block.inner(area);
    frame.render_widget(info_block, area);

    let mut lines = Vec::new();
    let game = &app.game;
    let (white_count, black_count) = game.material();
    let side_to_move = game.side_to_move();

    lines.push(Line::from(""));

    // Turn indicator
    let turn_text = match side_to_move {
        Side::White => "White's turn (○)",
        Side::Black => "Black's turn (●)",
    };
    lines.push(Line::from(Span::styled(turn_text, side_style(side_to_move))));
    lines.push(Line::from(""));

    // Material
    lines.push(Line::from(vec![
        Span::raw("White: "),
        Span::styled(format!("{white_count:2}"), side_style(Side::White)),
        Span::raw("  "),
        Span::raw("Black: "),
        Span::styled(format!("{black_count:2}"), side_style(Side::Black)),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::raw("Mode:  "),
        Span::styled(app.mode.as_str(), Style::default().fg(Color::Cyan)),
    ]));
    lines.push(Line::from(vec![
        Span::raw("Ply:   "),
        Span::styled(
            format!("{} / {}", game.grid_index(), game.history_len() - 1),
            Style::default().fg(Color::Cyan),
        ),
    ]));
    if let Some(alt_idx) = game.alternate_index() {
        lines.push(Line::from(vec![
            Span::raw("Alt:   "),
            Span::styled(
                format!("+{}", alt_idx + 1),
                Style::default().fg(Color::Magenta),
            ),
        ]));
    }

    match app.selected {
        Some(sq) => lines.push(Line::from(vec![
            Span::raw("Pick:  "),
            Span::styled(sq.to_string(), Style::default().fg(Color::Magenta)),
        ])),
        None => lines.push(Line::from(vec![
            Span::raw("Pick:  "),
            Span::styled("--", Style::default().fg(Color::DarkGray)),
        ])),
    }

    lines.push(Line::from(""));
    lines.push(Line::from("─".repeat(inner_area.width as usize)));

    // Moves of the active line, alternate moves in magenta
    let moves = game.moves();
    if !moves.is_empty() {
        lines.push(Line::from(Span::styled(
            "Moves:",
            Style::default().fg(Color::Cyan),
        )));

        let max_width = inner_area.width.saturating_sub(2) as usize;
        let mut current_spans: Vec<Span> = vec![Span::raw(" ")];
        let mut current_len = 1usize;

        for (i, (mv, capture)) in moves.iter().enumerate() {
            let move_str = format!("{} ", notation::format_move(*mv, *capture));
            let move_len = move_str.chars().count();

            if current_len + move_len > max_width && current_len > 1 {
                lines.push(Line::from(current_spans));
                current_spans = vec![Span::raw(" ")];
                current_len = 1;
            }

            let style = if i >= game.grid_index() {
                Style::default().fg(Color::Magenta)
            } else if i % 2 == 0 {
                side_style(Side::White)
            } else {
                side_style(Side::Black)
            };
            current_spans.push(Span::styled(move_str, style));
            current_len += move_len;
        }

        if current_len > 1 {
            lines.push(Line::from(current_spans));
        }
    }

    if let Some(winner) = game.winner() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "*** Game Over ***",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{} wins!", winner.as_str()),
            side_style(winner),
        )));
    }

    if let Some(ref msg) = app.status_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            msg.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }

    let info = Paragraph::new(lines);
    frame.render_widget(info, inner_area);
}

/// Renders the help bar at the bottom.
fn render_help_bar(frame: &mut Frame, area: Rect, app: &App) {
    let select = match app.mode {
        AppMode::Play => ("Enter", "Pick/Drop"),
        AppMode::Replay => ("Space", "Step"),
    };
    let help_items = [
        select,
        ("←", "Undo"),
        ("→", "Redo"),
        ("B", "Beginning"),
        ("R", "Reset"),
        ("Q", "Quit"),
    ];

    let spans: Vec<Span> = help_items
        .iter()
        .flat_map(|(key, desc)| {
            vec![
                Span::styled(
                    format!(" [{key}] "),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                ),
                Span::raw(format!("{desc} ")),
            ]
        })
        .collect();

    let help = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(help, area);
}

/// Renders the quit confirmation dialog.
fn render_quit_dialog(frame: &mut Frame) {
    let area = centered_rect(40, 15, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Quit Breakthrough?",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press Y to quit, N to cancel"),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Confirm "),
        );
    frame.render_widget(dialog, area);
}

/// Creates a centered rectangle with the given percentage of the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
