//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders at the bottom of the board area, above the status bar.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

const TOAST_DURATION: Duration = Duration::from_secs(2);

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: TOAST_DURATION,
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Where the toast lands inside `area`: centered, two rows above the bottom
    fn placement(&self, area: Rect) -> Rect {
        // 1 line of text + 2 for borders, 2 columns of padding each side
        let height = 3;
        let text_width = u16::try_from(self.message.width()).unwrap_or(u16::MAX);
        let width = text_width
            .saturating_add(4)
            .min(area.width.saturating_sub(4));

        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.bottom().saturating_sub(height + 2);
        Rect::new(x, y, width, height)
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let toast_area = self.placement(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.highlight))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        // Clear the area first so toast appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_visible() {
        assert!(!Toast::new("Search cancelled").is_expired());
    }

    #[test]
    fn placement_is_centered_and_clamped() {
        let toast = Toast::new("Generated 6 values");
        let spot = toast.placement(Rect::new(0, 0, 80, 30));
        assert_eq!(spot.width, 22);
        assert_eq!(spot.x, 29);
        assert_eq!(spot.y, 25);

        let narrow = toast.placement(Rect::new(0, 0, 10, 30));
        assert_eq!(narrow.width, 6);
    }
}
