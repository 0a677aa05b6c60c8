//! Logs panel component
//!
//! Tails the in-memory log buffer filled by `TuiLogLayer`; the newest entry
//! is always on the bottom line.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Format a log entry for display
fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

/// Get color style for log level
fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.log_error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.log_warn),
        LogLevel::Info => Style::default().fg(theme.log_info),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.log_debug),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.recent(height);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry)).style(log_level_style(entry.level, theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" System Logs ({}) ", app.log_buffer.count())),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn entries_render_with_time_and_level() {
        let entry = LogEntry {
            timestamp: chrono::Utc.with_ymd_and_hms(2024, 1, 15, 9, 5, 7).unwrap(),
            level: LogLevel::Warn,
            target: "searchlight::session".into(),
            message: "Search rejected".into(),
        };
        assert_eq!(format_log_entry(&entry), "[09:05:07] WARN  Search rejected");
    }

    #[test]
    fn errors_are_bold() {
        let theme = Theme::by_name("Terminal");
        let style = log_level_style(LogLevel::Error, &theme);
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(log_level_style(LogLevel::Trace, &theme).fg, Some(theme.log_debug));
    }
}
