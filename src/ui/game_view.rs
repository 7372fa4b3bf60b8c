use std::str::FromStr;

use super::status::StatusLine;
use crate::game::{GameSession, Outcome, Placement, Position, Seat};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    status: &StatusLine,
) {
    let board_rows = u16::try_from(session.board().height())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Header
            Constraint::Min(board_rows),    // Board
            Constraint::Length(3),          // Message
            Constraint::Length(3),          // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_board(frame, session, selected_column, status.last_placement(), chunks[1]);
    render_message(frame, status.message(), chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Map a player's color attribute to a terminal color, falling back to the
/// seat's traditional color when the name is not one ratatui knows.
fn seat_color(session: &GameSession, seat: Seat) -> Color {
    Color::from_str(&session.player(seat).color).unwrap_or(match seat {
        Seat::One => Color::Red,
        Seat::Two => Color::Yellow,
    })
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let seat = session.current_seat();
    let status = if session.is_terminal() {
        "Game Over".to_string()
    } else {
        format!("Current Player: {}", session.player(seat).name)
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(seat_color(session, seat))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    last_placement: Option<Placement>,
    area: Rect,
) {
    let board = session.board();
    let winning: Vec<Position> = match session.outcome() {
        Some(Outcome::Win { line, .. }) => line.to_vec(),
        _ => Vec::new(),
    };
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(board.width() * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..board.width() {
            let span = match board.get(row, col) {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(seat) => {
                    let mut style = Style::default().fg(seat_color(session, seat));
                    if winning.contains(&Position::new(row, col)) {
                        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                    } else if last_placement.is_some_and(|p| (p.row, p.col) == (row, col)) {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..board.width() {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
