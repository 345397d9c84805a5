//! Terminal UI rendering with ratatui
//!
//! Pure presentation: everything drawn here comes out of the engine's
//! query surface, nothing is written back.

use crate::board::{BOARD_HEIGHT, BOARD_WIDTH, Cell};
use crate::game::GameEngine;
use crate::tetromino::TetrominoType;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Each board cell renders as two terminal columns
const CELL: &str = "██";
const EMPTY: &str = " .";

/// Board (20 wide + borders) plus the side panel
const GAME_WIDTH: u16 = BOARD_WIDTH as u16 * 2 + 2 + 16;
const GAME_HEIGHT: u16 = BOARD_HEIGHT as u16 + 2;

fn piece_color(kind: TetrominoType) -> Color {
    let (r, g, b) = kind.rgb();
    Color::Rgb(r, g, b)
}

/// Render the whole game screen
pub fn render(frame: &mut Frame, engine: &GameEngine) {
    let area = center_rect(frame.area(), GAME_WIDTH, GAME_HEIGHT);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BOARD_WIDTH as u16 * 2 + 2),
            Constraint::Length(16),
        ])
        .split(area);

    render_board(frame, engine, layout[0]);
    render_side_panel(frame, engine, layout[1]);

    if engine.is_paused() {
        render_overlay(frame, layout[0], "PAUSED", Color::Yellow);
    } else if engine.is_game_over() {
        render_overlay(frame, layout[0], "GAME OVER", Color::Red);
    }
}

fn render_board(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("BLOCKFALL")
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (kind, piece_cells) = engine.current_piece();

    let mut lines = Vec::with_capacity(BOARD_HEIGHT as usize);
    for y in 0..BOARD_HEIGHT {
        let mut spans = Vec::with_capacity(BOARD_WIDTH as usize);
        for x in 0..BOARD_WIDTH {
            let span = if piece_cells.contains(&(x, y)) {
                Span::styled(CELL, Style::default().fg(piece_color(kind)))
            } else {
                match engine.cell(x, y) {
                    Some(Cell::Filled(locked)) => {
                        Span::styled(CELL, Style::default().fg(piece_color(locked)))
                    }
                    _ => Span::styled(EMPTY, Style::default().fg(Color::DarkGray)),
                }
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_side_panel(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Min(5),
        ])
        .split(area);

    render_preview(frame, engine.next_kind(), layout[0]);

    let stats = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Score "),
            Span::styled(engine.score().to_string(), Style::default().fg(Color::Cyan).bold()),
        ]),
        Line::from(vec![
            Span::raw("Level "),
            Span::styled(engine.level().to_string(), Style::default().fg(Color::Cyan).bold()),
        ]),
    ])
    .block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(stats, layout[1]);

    let help = Paragraph::new(vec![
        Line::styled("←→↓ move", Style::default().fg(Color::DarkGray)),
        Line::styled("↑ rotate", Style::default().fg(Color::DarkGray)),
        Line::styled("p pause", Style::default().fg(Color::DarkGray)),
        Line::styled("n new game", Style::default().fg(Color::DarkGray)),
        Line::styled("q quit", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(help, layout[2]);
}

fn render_preview(frame: &mut Frame, kind: TetrominoType, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Next");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Shapes fit a 4x4 window anchored at the origin
    let shape = kind.shape();
    let mut lines = Vec::with_capacity(4);
    for dy in 0..4 {
        let mut spans = Vec::with_capacity(4);
        for dx in 0..4 {
            if shape.contains(&(dx, dy)) {
                spans.push(Span::styled(CELL, Style::default().fg(piece_color(kind))));
            } else {
                spans.push(Span::raw("  "));
            }
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_overlay(frame: &mut Frame, board_area: Rect, text: &str, color: Color) {
    let overlay = center_rect(board_area, text.len() as u16 + 4, 3);
    frame.render_widget(Clear, overlay);
    let banner = Paragraph::new(Line::styled(text, Style::default().fg(color).bold()))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, overlay);
}

/// Center a fixed-size rect inside an area, clamped to fit
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
