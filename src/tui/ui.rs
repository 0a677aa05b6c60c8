// UI rendering - frame layout
//
// ┌ title ─────────────────────────────┐
// │ array field          │ target      │
// │ linear board                       │
// │ binary board                       │
// │ comparison chart                   │
// │ logs                               │
// └ status ────────────────────────────┘
//
// Modals and toasts are drawn last, on top of everything else.

use super::app::App;
use super::board::{self, Board};
use super::components::{
    board_panel, chart_panel, input_panel, logs_panel, status_bar, title_bar,
};
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Tallest a board panel will grow when its cells wrap
const MAX_BOARD_HEIGHT: u16 = 9;
const CHART_HEIGHT: u16 = 6;

/// Rows needed for a board: borders, one value+index pair per cell row, readouts
fn board_height(board: &Board, width: u16) -> u16 {
    let per_row = (width.saturating_sub(2) / board_panel::CELL_WIDTH).max(1) as usize;
    let rows = board.cells.len().div_ceil(per_row).max(1);
    let height = 2 + 2 * rows + 1;
    u16::try_from(height).unwrap_or(u16::MAX).min(MAX_BOARD_HEIGHT)
}

pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let base = Style::default()
        .bg(app.theme.background)
        .fg(app.theme.foreground);
    f.render_widget(Block::default().style(base), area);

    let linear = board::snapshot(&app.linear_board);
    let binary = board::snapshot(&app.binary_board);

    let [title, input, linear_area, binary_area, chart, logs, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(board_height(&linear, area.width)),
        Constraint::Length(board_height(&binary, area.width)),
        Constraint::Length(CHART_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(2),
    ])
    .areas(area);

    title_bar::render(f, title, app);
    input_panel::render(f, input, app);

    // The board being animated gets the focus border
    let running = app.is_running();
    let linear_active = running && binary.cells.is_empty();
    board_panel::render(f, linear_area, &linear, &app.theme, linear_active);
    board_panel::render(
        f,
        binary_area,
        &binary,
        &app.theme,
        running && !binary.cells.is_empty(),
    );

    {
        let metrics = app
            .metrics
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        chart_panel::render(f, chart, &metrics, &app.theme);
    }

    logs_panel::render(f, logs, app);
    status_bar::render(f, status, app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
    if let Some(modal) = &app.modal {
        modal.render(f, area, &app.theme);
    }
}
