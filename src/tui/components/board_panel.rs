// Board panel component
//
// One panel per algorithm: the array as a row of cells with their indices
// underneath, then the two readouts. Long arrays wrap onto extra rows.

use crate::player::Highlight;
use crate::theme::Theme;
use crate::tui::board::{Board, Cell};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Columns per cell, including the gap after it
pub const CELL_WIDTH: u16 = 6;

/// Style for one cell; `Found` is drawn over `Current`
pub fn cell_style(cell: &Cell, theme: &Theme) -> Style {
    match cell.highlight() {
        Some(Highlight::Found) => Style::default()
            .fg(theme.background)
            .bg(theme.cell_found)
            .add_modifier(Modifier::BOLD),
        Some(Highlight::Current) => Style::default()
            .fg(theme.background)
            .bg(theme.cell_current)
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(theme.cell),
    }
}

/// Value and index lines for the cells, `per_row` cells at a time
fn cell_lines(board: &Board, per_row: usize, theme: &Theme) -> Vec<Line<'static>> {
    let per_row = per_row.max(1);
    let mut lines = Vec::new();

    for (row, chunk) in board.cells.chunks(per_row).enumerate() {
        let mut values = Vec::with_capacity(chunk.len() * 2);
        let mut indices = Vec::with_capacity(chunk.len());

        for (offset, cell) in chunk.iter().enumerate() {
            let index = row * per_row + offset;
            values.push(Span::styled(format!(" {:>3} ", cell.value), cell_style(cell, theme)));
            values.push(Span::raw(" "));
            indices.push(Span::styled(
                format!(" {:>3}  ", index),
                Style::default().fg(theme.muted),
            ));
        }

        lines.push(Line::from(values));
        lines.push(Line::from(indices));
    }
    lines
}

fn readout_line(board: &Board, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(board.steps_text.clone(), Style::default().fg(theme.readout)),
        Span::styled("   │   ", Style::default().fg(theme.muted)),
        Span::styled(board.found_text.clone(), Style::default().fg(theme.readout)),
    ])
}

pub fn render(f: &mut Frame, area: Rect, board: &Board, theme: &Theme, active: bool) {
    let border_color = if active {
        theme.highlight
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", board.algorithm.name()));

    let per_row = (block.inner(area).width / CELL_WIDTH) as usize;
    let mut lines = if board.cells.is_empty() {
        vec![
            Line::styled("(no array)", Style::default().fg(theme.muted)),
            Line::default(),
        ]
    } else {
        cell_lines(board, per_row, theme)
    };
    lines.push(readout_line(board, theme));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
