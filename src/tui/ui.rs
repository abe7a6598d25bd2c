//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Mode};
use crate::games::tictactoe::{Mark, Outcome, Position, Square};

/// Renders players, board, win banner and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let won = matches!(app.session().outcome(), Outcome::Won(_));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                        // Title
            Constraint::Length(5),                        // Players
            Constraint::Length(if won { 3 } else { 0 }), // Win banner
            Constraint::Min(11),                          // Board
            Constraint::Length(3),                        // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_players(frame, chunks[1], app);
    if won {
        draw_banner(frame, chunks[2], app);
    }
    draw_board(frame, chunks[3], app);

    let help = "arrows/1-9 play  r restart  e/E rename  c/C clear wins  q quit";
    let status = Paragraph::new(vec![
        Line::from(Span::styled(app.status(), Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(status, chunks[4]);
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (mark, col) in [(Mark::X, cols[0]), (Mark::O, cols[1])] {
        draw_player(frame, col, app, mark);
    }
}

fn draw_player(frame: &mut Frame, area: Rect, app: &App, mark: Mark) {
    let session = app.session();
    let player = session.player(mark);

    let name = match app.mode() {
        Mode::EditingName { mark: editing, buffer } if *editing == mark => Span::styled(
            format!("{}_", buffer),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ),
        _ => Span::styled(player.name().clone(), Style::default().add_modifier(Modifier::BOLD)),
    };

    let border = if session.is_active(mark) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text = vec![
        Line::from(vec![
            name,
            Span::raw("  "),
            Span::styled(mark.to_string(), mark_style(mark)),
        ]),
        Line::from(format!("Wins: {}", player.wins())),
    ];

    let panel = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(panel, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let Some(winner) = app.session().outcome().winner() else {
        return;
    };
    let text = format!(
        "{} wins! Press 'r' to play again",
        app.session().player(winner).name()
    );
    let banner = Paragraph::new(text)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, chunk, app, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let session = app.session();

    let (symbol, mut style) = match session.game().board().get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };

    if session.winning_line().is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == app.cursor() && session.is_accepting_moves() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", symbol), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
