// Status bar component
//
// Renders session info at the bottom: uptime, completed runs, step delay,
// the latest search event and key hints. Narrow terminals drop the hints.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Below this width the key hints are left out
const HINTS_MIN_WIDTH: u16 = 100;

const KEY_HINTS: &str = "Enter:run  Tab:field  ^G:random  Esc:cancel  ?:help  ^Q:quit";

fn status_text(app: &App, width: u16) -> String {
    let base = format!(
        " {} │ runs {} │ {}ms/step │ {}",
        app.uptime(),
        app.runs_completed,
        app.config.step_delay_ms,
        app.status,
    );

    if width >= HINTS_MIN_WIDTH {
        format!("{} │ {}", base, KEY_HINTS)
    } else {
        base
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(status_text(app, area.width))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
