//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Cell, GameSnapshot, Mark, Position};

use super::app::App;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "←↑↓→/Tab move · Enter/Space/1-9 place · r restart · h help · q quit";

/// Renders the whole screen: title, score, status, board and help.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();
    let help_height = if app.show_help() { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Title
            Constraint::Length(3),           // Score
            Constraint::Length(3),           // Status
            Constraint::Min(BOARD_HEIGHT),   // Board
            Constraint::Length(help_height), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_score(frame, chunks[1], &snapshot);

    let status = Paragraph::new(snapshot.status_text())
        .style(status_style(&snapshot))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    draw_board(frame, chunks[3], &snapshot, app.cursor());

    if app.show_help() {
        let help = Paragraph::new(HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(help, chunks[4]);
    }
}

fn status_style(snapshot: &GameSnapshot) -> Style {
    let style = Style::default().fg(Color::Yellow);
    if snapshot.is_terminal() {
        style.add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

fn draw_score(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let score = snapshot.score();
    let panel = centered(area, 36, 3);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(panel);

    let entries = [
        ("X", *score.wins_x(), mark_color(Mark::X)),
        ("Tie", *score.ties(), Color::Gray),
        ("O", *score.wins_o(), mark_color(Mark::O)),
    ];

    for ((label, value, color), col) in entries.into_iter().zip(cols.iter()) {
        let tally = Paragraph::new(value.to_string())
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(label)
                    .title_alignment(Alignment::Center),
            );
        frame.render_widget(tally, *col);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position) {
    let board_area = centered(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], snapshot, cursor, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    cursor: Position,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], snapshot, pos, pos == cursor);
        }
        if col < 2 {
            let sep = Paragraph::new(vec![Line::raw("│"); CELL_HEIGHT as usize])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    pos: Position,
    is_cursor: bool,
) {
    let (symbol, mut style) = match snapshot.board().get(pos) {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(mark) => (
            mark.to_string(),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
    };

    if snapshot.is_highlighted(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    // Filled cells only get an underline under the cursor.
    if is_cursor && snapshot.is_playable(pos) {
        style = style.add_modifier(Modifier::REVERSED);
    } else if is_cursor && !snapshot.is_terminal() {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    let text = vec![
        Line::raw(""),
        Line::from(Span::styled(symbol, style)),
        Line::raw(""),
    ];
    let paragraph = Paragraph::new(text)
        .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [vert] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vert);
    rect
}
