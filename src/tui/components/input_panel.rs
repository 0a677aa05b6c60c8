// Input panel component
//
// Array and target fields side by side. The focused field gets the
// highlight border and the terminal cursor.

use crate::theme::Theme;
use crate::tui::app::{App, Focus};
use crate::tui::field::TextField;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// The longest suffix of `value` that fits in `width` columns
fn visible_tail(value: &str, width: u16) -> &str {
    let mut used = 0usize;
    let mut start = value.len();
    for (i, c) in value.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > width as usize {
            break;
        }
        start = i;
    }
    &value[start..]
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    field: &TextField,
    focused: bool,
    theme: &Theme,
    show_cursor: bool,
) {
    let border_color = if focused {
        theme.highlight
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color))
        .title(field.title);
    let inner = block.inner(area);

    // Leave one column for the cursor
    let text = visible_tail(field.value(), inner.width.saturating_sub(1));
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(theme.foreground))
        .block(block);
    f.render_widget(paragraph, area);

    if focused && show_cursor {
        let offset = u16::try_from(text.width()).unwrap_or(0);
        f.set_cursor_position((inner.x + offset, inner.y));
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let [array_area, target_area] =
        Layout::horizontal([Constraint::Percentage(75), Constraint::Percentage(25)]).areas(area);

    let show_cursor = app.modal.is_none();
    render_field(
        f,
        array_area,
        &app.array_field,
        app.focus == Focus::Array,
        &app.theme,
        show_cursor,
    );
    render_field(
        f,
        target_area,
        &app.target_field,
        app.focus == Focus::Target,
        &app.theme,
        show_cursor,
    );
}
