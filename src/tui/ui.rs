//! Stateless UI rendering for the terminal board.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tictactoe_board::{Mark, Position, Square};

use crate::Session;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GAP: u16 = 1;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + GAP * 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + GAP * 2;

/// Screen regions for one frame.
///
/// Computed from the terminal size alone, so the event loop can hit-test a
/// mouse click against the same rectangles the last frame was drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    label: Rect,
    help: Rect,
    cells: [Rect; 9],
}

impl BoardLayout {
    /// Splits `area` into label, grid, and help line.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Current player
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Help
            ])
            .split(area);

        let grid = center_rect(chunks[1], GRID_WIDTH, GRID_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            let x = grid.x + pos.col() as u16 * (CELL_WIDTH + GAP);
            let y = grid.y + pos.row() as u16 * (CELL_HEIGHT + GAP);
            Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(grid)
        });

        Self {
            label: chunks[0],
            help: chunks[2],
            cells,
        }
    }

    /// Rectangle of the given cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Finds the cell under terminal coordinates, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let r = self.cell(*pos);
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
    }
}

/// Renders the label, grid, and help line.
pub fn draw(frame: &mut Frame, session: &Session, cursor: Position, title: &str) {
    let layout = BoardLayout::new(frame.area());

    let label = Paragraph::new(session.turn_label())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(label, layout.label);

    for pos in Position::ALL {
        draw_cell(frame, layout.cell(pos), session.board().get(pos), pos == cursor);
    }

    let help = Paragraph::new("Click or 1-9 to mark | Arrows + Enter | Q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, selected: bool) {
    let style = match square.mark() {
        None => Style::default().fg(Color::DarkGray),
        Some(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Some(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let border = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(square.text(), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));

    frame.render_widget(paragraph, area);
}

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
